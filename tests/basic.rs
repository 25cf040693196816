use cliches::actor::spawn_store;
use cliches::config::StoreConfig;
use cliches::store::ClicheStore;

fn seeded() -> StoreConfig {
    StoreConfig::default()
}

fn empty() -> StoreConfig {
    StoreConfig {
        seed: false,
        ..StoreConfig::default()
    }
}

#[tokio::test]
async fn fresh_store_lists_the_three_seed_pairs() {
    let store = spawn_store(&seeded());
    let all = store.list_all().await.unwrap();
    assert_eq!(
        all,
        "\n1: Out of sight, out of mind.  Absence makes the heart grow fonder.\n\
         2: A penny saved is a penny earned.  Penny-wise and dollar-foolish.\n\
         3: He who hesitates is lost.  Look before you leap.\n"
    );
}

#[tokio::test]
async fn unknown_id_reads_as_bad_id() {
    let store = spawn_store(&seeded());
    assert_eq!(store.get_one(9999).await.unwrap(), "\nBad Id: 9999\n");
}

#[tokio::test]
async fn create_then_get_returns_the_same_text() {
    let store = spawn_store(&seeded());
    let created = store
        .create("Birds of a feather flock together.".into(), "Opposites attract.".into())
        .await
        .unwrap();
    assert_eq!(created, "\nCreated: Birds of a feather flock together. Opposites attract.\n");

    let one = store.get_one(4).await.unwrap();
    assert_eq!(one, "\n4: Birds of a feather flock together.  Opposites attract.\n");
}

#[tokio::test]
async fn edit_replaces_text_and_keeps_the_id() {
    let store = spawn_store(&seeded());
    let edited = store.edit(1, "p2".into(), "c2".into()).await.unwrap();
    assert_eq!(edited, "\nCliche edited: p2 c2\n");
    assert_eq!(store.get_one(1).await.unwrap(), "\n1: p2  c2\n");

    assert_eq!(store.edit(50, "x".into(), "y".into()).await.unwrap(), "\nBad Id: 50\n");
}

#[tokio::test]
async fn delete_removes_only_the_target() {
    let store = spawn_store(&seeded());
    assert_eq!(store.delete(2).await.unwrap(), "\nCliche 2 deleted\n");
    assert_eq!(store.get_one(2).await.unwrap(), "\nBad Id: 2\n");
    assert_eq!(store.delete(2).await.unwrap(), "\nBad Id: 2\n");

    assert_eq!(
        store.list_all().await.unwrap(),
        "\n1: Out of sight, out of mind.  Absence makes the heart grow fonder.\n\
         3: He who hesitates is lost.  Look before you leap.\n"
    );
}

#[tokio::test]
async fn ids_keep_increasing_across_deletes() {
    let store = spawn_store(&empty());
    store.create("a".into(), "1".into()).await.unwrap();
    store.create("b".into(), "2".into()).await.unwrap();
    store.delete(2).await.unwrap();
    store.delete(1).await.unwrap();
    store.create("c".into(), "3".into()).await.unwrap();

    assert_eq!(store.list_all().await.unwrap(), "\n3: c  3\n");
}

#[tokio::test]
async fn unseeded_store_starts_empty_at_id_one() {
    let store = spawn_store(&empty());
    assert_eq!(store.list_all().await.unwrap(), "\n");
    store.create("x".into(), "y".into()).await.unwrap();
    assert_eq!(store.get_one(1).await.unwrap(), "\n1: x  y\n");
}
