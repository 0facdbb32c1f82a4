//! End-to-end scenarios against the public API.

use std::collections::BTreeSet;
use std::io::Write;

use wordgraph::{build_dawg_from_file, Builder, Dawg, DawgConfig, DawgError, LoadError};

const WORDS: [&str; 8] = ["a", "i", "in", "inn", "tea", "ted", "ten", "to"];

fn set(words: Vec<String>) -> BTreeSet<String> {
    words.into_iter().collect()
}

#[test]
fn tea_ted_ten() {
    let dawg = Dawg::from_words(WORDS).unwrap();
    assert!(dawg.search("tea"));
    assert!(!dawg.search("te"));
    assert!(dawg.prefix_exist("te"));
    assert_eq!(
        set(dawg.prefix_search("te")),
        BTreeSet::from(["tea", "ted", "ten"].map(String::from))
    );
    assert!(dawg.prefix_search("z").is_empty());

    let total_len: usize = WORDS.iter().map(|w| w.len()).sum();
    assert!(dawg.edge_count() < total_len);
}

#[test]
fn input_order_does_not_matter() {
    let mut shuffled = WORDS;
    shuffled.reverse();
    shuffled.swap(1, 5);
    let a = Dawg::from_words(WORDS).unwrap();
    let b = Dawg::from_words(shuffled).unwrap();
    assert_eq!(a.edge_count(), b.edge_count());
    assert_eq!(a.state_count(), b.state_count());
    assert_eq!(a.words().collect::<Vec<_>>(), b.words().collect::<Vec<_>>());
}

#[test]
fn empty_input_list() {
    let dawg = Dawg::from_words(Vec::<&str>::new()).unwrap();
    assert_eq!(dawg.root().child_count(), 0);
    assert!(!dawg.root().is_word());
    assert!(!dawg.search(""));
    assert!(!dawg.search("anything"));
    assert!(dawg.prefix_search("").is_empty());
}

#[test]
fn queries_do_not_change_the_graph() {
    let dawg = Dawg::from_words(WORDS).unwrap();
    let edges = dawg.edge_count();
    for _ in 0..3 {
        assert!(dawg.search("inn"));
        assert!(dawg.prefix_exist("i"));
        assert_eq!(set(dawg.prefix_search("i")), set(dawg.prefix_search("i")));
    }
    assert_eq!(dawg.edge_count(), edges);
}

#[test]
fn concurrent_readers() {
    let words: Vec<String> = (0..2_000).map(|i| format!("w{i:05}")).collect();
    let dawg = Dawg::from_words(&words).unwrap();

    std::thread::scope(|scope| {
        for chunk in words.chunks(500) {
            let dawg = &dawg;
            scope.spawn(move || {
                for word in chunk {
                    assert!(dawg.search(word));
                    assert!(dawg.prefix_exist(&word[..3]));
                    assert!(!dawg.search(&format!("{word}x")));
                }
                assert_eq!(dawg.prefix_search("w001").len(), 100);
            });
        }
    });
}

#[test]
fn strict_builder_reports_duplicates() {
    let mut builder = Builder::with_config(DawgConfig::strict());
    builder.insert("echo").unwrap();
    assert_eq!(
        builder.insert("ECHO"),
        Err(DawgError::DuplicateWord("echo".into()))
    );
}

#[test]
fn loads_word_list_file() {
    let path = std::env::temp_dir().join(format!("wordgraph-{}.txt", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "# words").unwrap();
        writeln!(file, "Zebra").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "yak").unwrap();
    }
    let dawg = build_dawg_from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(dawg.words().collect::<Vec<_>>(), ["yak", "zebra"]);
    assert!(matches!(
        Dawg::from_file(&path),
        Err(LoadError::Io(_))
    ));
}
