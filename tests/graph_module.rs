use socialgraph::graph::{GraphInfo, GraphStore, HopRange, MemoryGraph, Person};

fn names(friends: &[Person]) -> Vec<&str> {
    friends.iter().map(|f| f.name.as_str()).collect()
}

// alice - bob - carol - dave, plus alice - erin - carol
async fn create_sample_graph() -> MemoryGraph {
    let g = MemoryGraph::new();
    for (name, age) in [
        ("alice", Some(30)),
        ("bob", Some(31)),
        ("carol", None),
        ("dave", Some(40)),
        ("erin", Some(25)),
    ] {
        g.add(name, age).await.unwrap();
    }
    for (a, b) in [
        ("alice", "bob"),
        ("bob", "carol"),
        ("carol", "dave"),
        ("alice", "erin"),
        ("erin", "carol"),
    ] {
        g.befriend(a, b).await.unwrap();
    }
    g
}

#[tokio::test]
async fn test_add_is_idempotent() {
    let g = MemoryGraph::new();
    assert_eq!(g.add("alice", Some(30)).await.unwrap(), 1);
    assert_eq!(g.add("alice", Some(99)).await.unwrap(), 0);
    assert_eq!(g.info().await.unwrap().nodes, 1);

    // The second add must not touch the age.
    g.add("bob", None).await.unwrap();
    g.befriend("bob", "alice").await.unwrap();
    let friends = g.list_friends("bob", HopRange::new(1, false)).await.unwrap();
    assert_eq!(friends, vec![Person::new("alice", Some(30))]);
}

#[tokio::test]
async fn test_remove_missing_person_is_zero() {
    let g = MemoryGraph::new();
    assert_eq!(g.remove("nobody").await.unwrap(), 0);
}

#[tokio::test]
async fn test_remove_cascades_to_friendships() {
    let g = create_sample_graph().await;
    assert_eq!(
        g.info().await.unwrap(),
        GraphInfo {
            nodes: 5,
            relationships: 5
        }
    );

    assert_eq!(g.remove("carol").await.unwrap(), 1);
    assert_eq!(
        g.info().await.unwrap(),
        GraphInfo {
            nodes: 4,
            relationships: 2
        }
    );
    assert_eq!(g.remove("carol").await.unwrap(), 0);
}

#[tokio::test]
async fn test_edit_overwrites_age() {
    let g = MemoryGraph::new();
    assert_eq!(g.edit("ghost", 20).await.unwrap(), 0);

    g.add("alice", None).await.unwrap();
    g.add("bob", None).await.unwrap();
    g.befriend("bob", "alice").await.unwrap();
    assert_eq!(g.edit("alice", 41).await.unwrap(), 1);
    assert_eq!(g.edit("alice", 41).await.unwrap(), 1);

    let friends = g.list_friends("bob", HopRange::new(1, false)).await.unwrap();
    assert_eq!(friends, vec![Person::new("alice", Some(41))]);
}

#[tokio::test]
async fn test_befriend_requires_both_people() {
    let g = MemoryGraph::new();
    g.add("alice", None).await.unwrap();
    assert_eq!(g.befriend("alice", "ghost").await.unwrap(), 0);
    assert_eq!(g.befriend("ghost", "alice").await.unwrap(), 0);
    assert_eq!(g.info().await.unwrap().relationships, 0);
}

#[tokio::test]
async fn test_befriend_is_idempotent() {
    let g = MemoryGraph::new();
    g.add("alice", None).await.unwrap();
    g.add("bob", None).await.unwrap();

    assert_eq!(g.befriend("alice", "bob").await.unwrap(), 1);
    let since = g.friendship_since("alice", "bob").unwrap();
    assert_eq!(g.befriend("alice", "bob").await.unwrap(), 0);

    assert_eq!(g.info().await.unwrap().relationships, 1);
    assert_eq!(g.friendship_since("alice", "bob"), Some(since));
}

#[tokio::test]
async fn test_befriend_is_directed() {
    let g = MemoryGraph::new();
    g.add("alice", None).await.unwrap();
    g.add("bob", None).await.unwrap();

    assert_eq!(g.befriend("alice", "bob").await.unwrap(), 1);
    assert_eq!(g.befriend("bob", "alice").await.unwrap(), 1);
    assert_eq!(g.info().await.unwrap().relationships, 2);
    assert!(g.friendship_since("bob", "alice").is_some());
}

#[tokio::test]
async fn test_list_direct_friends_ignores_direction() {
    let g = create_sample_graph().await;
    let friends = g.list_friends("carol", HopRange::new(1, false)).await.unwrap();
    assert_eq!(names(&friends), vec!["bob", "dave", "erin"]);
}

#[tokio::test]
async fn test_list_exact_depth() {
    let g = create_sample_graph().await;
    // carol is reachable over two different two-hop paths but listed once.
    let friends = g.list_friends("alice", HopRange::new(2, false)).await.unwrap();
    assert_eq!(names(&friends), vec!["carol"]);
    assert_eq!(friends[0], Person::new("carol", None));
}

#[tokio::test]
async fn test_list_full_depth_is_union() {
    let g = create_sample_graph().await;
    let friends = g.list_friends("alice", HopRange::new(2, true)).await.unwrap();
    assert_eq!(names(&friends), vec!["bob", "carol", "erin"]);
}

#[tokio::test]
async fn test_list_never_includes_origin() {
    let g = create_sample_graph().await;
    // The bob/erin cycle leads back to alice after four hops.
    let friends = g.list_friends("alice", HopRange::new(4, true)).await.unwrap();
    assert_eq!(names(&friends), vec!["bob", "carol", "dave", "erin"]);
}

#[tokio::test]
async fn test_list_walks_may_revisit_people() {
    let g = MemoryGraph::new();
    for name in ["a", "b", "c"] {
        g.add(name, None).await.unwrap();
    }
    g.befriend("a", "b").await.unwrap();
    g.befriend("b", "c").await.unwrap();
    g.befriend("c", "a").await.unwrap();

    // In a triangle both direct friends are also two friendships away.
    let friends = g.list_friends("a", HopRange::new(2, false)).await.unwrap();
    assert_eq!(names(&friends), vec!["b", "c"]);

    // A walk cannot reuse a friendship, so a lone pair has nothing at depth 2.
    let g = MemoryGraph::new();
    g.add("x", None).await.unwrap();
    g.add("y", None).await.unwrap();
    g.befriend("x", "y").await.unwrap();
    let friends = g.list_friends("x", HopRange::new(2, false)).await.unwrap();
    assert!(friends.is_empty());
}

#[tokio::test]
async fn test_list_unknown_person_is_empty() {
    let g = create_sample_graph().await;
    let friends = g.list_friends("nobody", HopRange::new(3, true)).await.unwrap();
    assert!(friends.is_empty());
}

#[test]
fn test_hop_range() {
    assert_eq!(HopRange::new(3, false), HopRange { min: 3, max: 3 });
    assert_eq!(HopRange::new(3, true), HopRange { min: 1, max: 3 });
    assert!(HopRange::new(2, true).contains(1));
    assert!(!HopRange::new(2, false).contains(1));
    assert!(!HopRange::new(2, true).contains(3));
}
