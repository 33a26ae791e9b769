//! Integration tests for the three search operations, driven by the board
//! layout every test shares: note1, note2, a second copy of note1, note3.

use storyboard::{Note, Storyboard, TagSet};

fn note1() -> Note {
    Note::new("title1", "text1", TagSet::from(["tag1", "tag2"]))
}

fn note2() -> Note {
    Note::new("title2", "text2", TagSet::from(["tag2", "tag3"]))
}

fn note3() -> Note {
    Note::new("title3", "text1", TagSet::from(["tag1", "tag3"]))
}

fn reference_board() -> Storyboard {
    let mut board = Storyboard::new();
    board.add_note(note1());
    board.add_note(note2());
    board.add_note(note1());
    board.add_note(note3());
    board
}

#[test]
fn title_search_returns_every_exact_match() {
    let board = reference_board();

    assert_eq!(board.search_by_title("title1").len(), 2);
    assert_eq!(board.search_by_title("title2").len(), 1);
    assert_eq!(board.search_by_title("title3").len(), 1);
    assert!(board.search_by_title("title4").is_empty());
}

#[test]
fn title_search_is_case_sensitive_and_untrimmed() {
    let board = reference_board();

    assert!(board.search_by_title("Title1").is_empty());
    assert!(board.search_by_title(" title1").is_empty());
    assert!(board.search_by_title("title1 ").is_empty());
}

#[test]
fn text_search_returns_every_exact_match() {
    let board = reference_board();

    assert_eq!(board.search_by_text("text1").len(), 3);
    assert_eq!(board.search_by_text("text2").len(), 1);
    assert!(board.search_by_text("text4").is_empty());
}

#[test]
fn tag_search_matches_notes_whose_tags_cover_the_query() {
    let board = reference_board();

    // the full tag set of each note matches only the notes carrying it
    let (n1, n2, n3) = (note1(), note2(), note3());
    assert_eq!(board.search_by_tags(n1.tags()).len(), 2);
    assert_eq!(board.search_by_tags(n2.tags()).len(), 1);
    assert_eq!(board.search_by_tags(n3.tags()).len(), 1);

    // a single-tag query matches every note containing it
    assert_eq!(board.search_by_tags(&TagSet::from(["tag1"])).len(), 3);
    assert_eq!(board.search_by_tags(&TagSet::from(["tag2"])).len(), 3);
    assert!(board.search_by_tags(&TagSet::from(["tag4"])).is_empty());
}

#[test]
fn tag_search_is_a_subset_test_not_equality() {
    let mut board = Storyboard::new();
    board.add_note(Note::new(
        "title1",
        "text1",
        TagSet::from(["tag1", "tag2", "tag3"]),
    ));

    // a strict subset of the note's tags still matches
    let matches = board.search_by_tags(&TagSet::from(["tag1", "tag3"]));
    assert_eq!(matches.len(), 1);

    // one missing tag in the query disqualifies the note
    assert!(
        board
            .search_by_tags(&TagSet::from(["tag1", "tag4"]))
            .is_empty()
    );
}

#[test]
fn empty_tag_query_matches_every_note_in_order() {
    let board = reference_board();

    let matches = board.search_by_tags(&TagSet::new());

    assert_eq!(matches.len(), 4);
    let titles: Vec<&str> = matches.iter().map(Note::title).collect();
    assert_eq!(titles, ["title1", "title2", "title1", "title3"]);
}

#[test]
fn results_preserve_relative_board_order() {
    let board = reference_board();

    let matches = board.search_by_text("text1");

    let titles: Vec<&str> = matches.iter().map(Note::title).collect();
    assert_eq!(titles, ["title1", "title1", "title3"]);
}

#[test]
fn repeated_searches_on_an_unmodified_board_are_identical() {
    let board = reference_board();

    let first = board.search_by_tags(&TagSet::from(["tag1"]));
    let second = board.search_by_tags(&TagSet::from(["tag1"]));

    assert_eq!(first, second);
}

#[test]
fn results_survive_later_mutation_of_the_board() {
    let mut board = reference_board();

    let matches = board.search_by_title("title1");
    assert_eq!(matches.len(), 2);

    board.delete_note(&note1());
    board.delete_note(&note2());
    board.delete_note(&note3());
    assert!(board.is_empty());

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0], note1());
}

#[test]
fn unmatched_queries_return_empty_results_not_errors() {
    let board = Storyboard::new();

    assert!(board.search_by_title("").is_empty());
    assert!(board.search_by_text("").is_empty());
    assert!(board.search_by_tags(&TagSet::new()).is_empty());
}
