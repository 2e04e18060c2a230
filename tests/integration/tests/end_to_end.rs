//! End-to-end tests: platform events through the cache to disk and back
//! through the reader, plus the meow store flow.

use anyhow::Result;

use integration_tests::{
    from_author, memory_pool, platform_message, test_cache, wait_for_records, with_attachment,
    with_reactions, TEST_GUILD,
};
use meow_cache::read_server_channels;
use meow_core::{FilterKind, MeowEvent, MessageRecord, Snowflake};
use meow_db::MeowStore;

#[tokio::test]
async fn buffered_messages_reach_the_reader() -> Result<()> {
    let cache = test_cache("pipeline");

    let spicy = with_reactions(platform_message(10, 1, "hot take"), "🔥", 2);
    let bland = platform_message(10, 2, "nothing special");
    let tearful = with_reactions(platform_message(11, 3, "goodbye"), "😭", 1);

    cache.buffer_message(&spicy);
    cache.buffer_message(&bland);
    cache.buffer_message(&tearful);

    wait_for_records(&cache.layout().channel_file(TEST_GUILD, Snowflake::new(10)), 2).await?;
    wait_for_records(&cache.layout().channel_file(TEST_GUILD, Snowflake::new(11)), 1).await?;

    let fire = read_server_channels(cache.layout(), TEST_GUILD, FilterKind::Fire, None).await?;
    assert_eq!(fire.len(), 1);
    assert_eq!(fire[0].id, Snowflake::new(1));

    let all = read_server_channels(cache.layout(), TEST_GUILD, FilterKind::None, None).await?;
    assert_eq!(all.len(), 3);

    let any = read_server_channels(cache.layout(), TEST_GUILD, FilterKind::Any, None).await?;
    assert_eq!(any.len(), 2);
    Ok(())
}

#[tokio::test]
async fn reactions_buffered_before_flush_are_persisted() -> Result<()> {
    let cache = test_cache("reactions");

    let msg = platform_message(20, 1, "rate my setup");
    cache.buffer_message(&msg);
    cache.buffer_reaction(&msg, "🍅");
    cache.buffer_reaction(&msg, "🍅");
    cache.buffer_reaction(&msg, "🔥");

    let path = cache.layout().channel_file(TEST_GUILD, msg.channel_id);
    let records = wait_for_records(&path, 1).await?;
    assert_eq!(records[0].tomato_reacts, 2);
    assert_eq!(records[0].fire_reacts, 1);

    let tomatoes =
        read_server_channels(cache.layout(), TEST_GUILD, FilterKind::Tomato, None).await?;
    assert_eq!(tomatoes.len(), 1);
    Ok(())
}

#[tokio::test]
async fn formatted_record_round_trips_through_disk() -> Result<()> {
    let cache = test_cache("roundtrip");

    let msg = with_attachment(
        with_reactions(platform_message(30, 1, "look at this cat"), "🔥", 4),
        "https://cdn.example/cat.png",
    );
    let expected = MessageRecord::from_platform(&msg);

    cache.buffer_message(&msg);
    let path = cache.layout().channel_file(TEST_GUILD, msg.channel_id);
    let records = wait_for_records(&path, 1).await?;
    assert_eq!(records[0], expected);

    let read = read_server_channels(cache.layout(), TEST_GUILD, FilterKind::None, None).await?;
    assert_eq!(read, vec![expected]);
    Ok(())
}

#[tokio::test]
async fn author_filter_narrows_reader_output() -> Result<()> {
    let cache = test_cache("author");

    cache.buffer_message(&from_author(platform_message(40, 1, "mine"), 300));
    cache.buffer_message(&from_author(platform_message(40, 2, "theirs"), 301));
    cache.buffer_message(&from_author(platform_message(40, 3, "mine too"), 300));

    let path = cache.layout().channel_file(TEST_GUILD, Snowflake::new(40));
    wait_for_records(&path, 3).await?;

    let mine = read_server_channels(
        cache.layout(),
        TEST_GUILD,
        FilterKind::None,
        Some(Snowflake::new(300)),
    )
    .await?;
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|r| r.author_id == Snowflake::new(300)));
    Ok(())
}

#[tokio::test]
async fn reader_sees_only_flushed_state() -> Result<()> {
    let cache = test_cache("staleness");

    let first = platform_message(50, 1, "window one");
    cache.buffer_message(&first);
    let path = cache.layout().channel_file(TEST_GUILD, first.channel_id);
    wait_for_records(&path, 1).await?;

    // Second window is pending: the reader must still see only window one
    cache.buffer_message(&platform_message(50, 2, "window two"));
    let visible =
        read_server_channels(cache.layout(), TEST_GUILD, FilterKind::None, None).await?;
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, Snowflake::new(1));

    wait_for_records(&path, 2).await?;
    Ok(())
}

#[tokio::test]
async fn meow_store_leaderboard_flow() -> Result<()> {
    let store = MeowStore::new(memory_pool().await?);

    store.record_event(&MeowEvent::at("a", "S", 1)).await;
    store.record_event(&MeowEvent::at("b", "S", 2)).await;
    store.record_event(&MeowEvent::at("a", "S", 3)).await;

    let board = store.leaderboard("S").await;
    assert_eq!(board.len(), 2);
    assert_eq!((board[0].user.as_str(), board[0].total_count), ("a", 2));
    assert_eq!((board[1].user.as_str(), board[1].total_count), ("b", 1));

    assert!(store.leaderboard("unknown").await.is_empty());
    Ok(())
}

#[tokio::test]
async fn cache_and_store_share_one_event_stream() -> Result<()> {
    // A "meow" message both counts toward the leaderboard and lands in the
    // channel cache, mirroring how the bot's event handler fans out.
    let cache = test_cache("fanout");
    let store = MeowStore::new(memory_pool().await?);

    let msg = from_author(platform_message(60, 1, "meow"), 777);
    cache.buffer_message(&msg);
    store
        .record_event(&MeowEvent::new(msg.author_id.to_string(), TEST_GUILD))
        .await;

    let path = cache.layout().channel_file(TEST_GUILD, msg.channel_id);
    let records = wait_for_records(&path, 1).await?;
    assert_eq!(records[0].author_id, Snowflake::new(777));

    let board = store.leaderboard(TEST_GUILD).await;
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].user, "777");
    assert_eq!(board[0].total_count, 1);
    Ok(())
}
