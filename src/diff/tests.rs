use super::*;
use crate::apply::{apply_diff, revert_diff};
use pretty_assertions::assert_eq;

// Checks the result is a valid alignment of `old` and `new` and returns it.
fn diff_and_verify(old: &str, new: &str) -> Vec<Diff> {
    let solution = generate_diff(old, new);
    assert!(
        solution.iter().all(|diff| !diff.text().is_empty()),
        "empty record in {solution:?}"
    );
    assert_eq!(apply_diff(&solution), new);
    assert_eq!(revert_diff(&solution), old);
    solution
}

#[test]
fn identical_texts() {
    assert_eq!(diff_and_verify("", ""), Vec::<Diff>::new());
    assert_eq!(diff_and_verify("abc", "abc"), vec![Diff::equal("abc")]);
}

#[test]
fn one_side_empty() {
    assert_eq!(diff_and_verify("", "x"), vec![Diff::insert("x")]);
    assert_eq!(diff_and_verify("x", ""), vec![Diff::delete("x")]);
}

#[test]
fn single_chars() {
    assert_eq!(
        diff_and_verify("a", "b"),
        vec![Diff::delete("a"), Diff::insert("b")]
    );
}

#[test]
fn common_prefix_and_suffix() {
    assert_eq!(
        diff_and_verify("abcabc", "abXabc"),
        vec![
            Diff::equal("ab"),
            Diff::delete("c"),
            Diff::insert("X"),
            Diff::equal("abc"),
        ]
    );
}

#[test]
fn containment() {
    assert_eq!(
        diff_and_verify("abcd", "bc"),
        vec![Diff::delete("a"), Diff::equal("bc"), Diff::delete("d")]
    );
    assert_eq!(
        diff_and_verify("bc", "abcd"),
        vec![Diff::insert("a"), Diff::equal("bc"), Diff::insert("d")]
    );
    // Leading and trailing pieces are dropped once the affixes are trimmed
    assert_eq!(
        diff_and_verify("abcdef", "bcdefa"),
        vec![Diff::delete("a"), Diff::equal("bcdef"), Diff::insert("a")]
    );
}

#[test]
fn diff_test2() {
    assert_eq!(
        diff_and_verify("ABCABBA", "CBABAC"),
        vec![
            Diff::delete("A"),
            Diff::insert("C"),
            Diff::equal("B"),
            Diff::delete("C"),
            Diff::equal("AB"),
            Diff::delete("B"),
            Diff::equal("A"),
            Diff::insert("C"),
        ]
    );
}

#[test]
fn diff_test3() {
    assert_eq!(
        diff_and_verify("abgdef", "gh"),
        vec![
            Diff::delete("ab"),
            Diff::equal("g"),
            Diff::delete("d"),
            Diff::delete("ef"),
            Diff::insert("h"),
        ]
    );
}

#[test]
fn diff_test4() {
    assert_eq!(
        diff_and_verify("bat", "map"),
        vec![
            Diff::delete("b"),
            Diff::insert("m"),
            Diff::equal("a"),
            Diff::delete("t"),
            Diff::insert("p"),
        ]
    );
}

#[test]
fn diff_test5() {
    assert_eq!(
        diff_and_verify("abc", "def"),
        vec![Diff::delete("abc"), Diff::insert("def")]
    );
}

#[test]
fn diff_test6() {
    assert_eq!(
        diff_and_verify("ACZBDZ", "ACBCBDEFD"),
        vec![
            Diff::equal("AC"),
            Diff::delete("Z"),
            Diff::equal("B"),
            Diff::insert("C"),
            Diff::insert("B"),
            Diff::equal("D"),
            Diff::insert("E"),
            Diff::delete("Z"),
            Diff::insert("FD"),
        ]
    );
}

#[test]
fn swapped_chars() {
    assert_eq!(
        diff_and_verify("ab", "ba"),
        vec![Diff::delete("a"), Diff::equal("b"), Diff::insert("a")]
    );
}

#[test]
fn words() {
    assert_eq!(
        diff_and_verify("kitten", "sitting"),
        vec![
            Diff::delete("k"),
            Diff::insert("s"),
            Diff::equal("itt"),
            Diff::insert("i"),
            Diff::delete("e"),
            Diff::equal("n"),
            Diff::insert("g"),
        ]
    );

    assert_eq!(
        diff_and_verify("The quick brown fox", "The quack brown box"),
        vec![
            Diff::equal("The qu"),
            Diff::delete("i"),
            Diff::insert("a"),
            Diff::equal("ck brown "),
            Diff::delete("f"),
            Diff::insert("b"),
            Diff::equal("ox"),
        ]
    );
}

#[test]
fn test_unicode() {
    // Unicode snowman and unicode comet have the same first two bytes. A
    // byte-based diff would produce a 2-byte Equal followed by 1-byte Delete
    // and Insert.
    let snowman = "\u{2603}";
    let comet = "\u{2604}";
    assert_eq!(snowman.as_bytes()[..2], comet.as_bytes()[..2]);

    assert_eq!(
        diff_and_verify(snowman, comet),
        vec![Diff::delete(snowman), Diff::insert(comet)]
    );

    assert_eq!(
        diff_and_verify("héllo wörld", "hallo world"),
        vec![
            Diff::equal("h"),
            Diff::delete("é"),
            Diff::insert("a"),
            Diff::equal("llo w"),
            Diff::delete("ö"),
            Diff::insert("o"),
            Diff::equal("rld"),
        ]
    );

    assert_eq!(
        diff_and_verify("日本語テキスト", "日本のテキスト"),
        vec![
            Diff::equal("日本"),
            Diff::delete("語"),
            Diff::insert("の"),
            Diff::equal("テキスト"),
        ]
    );
}

#[test]
fn affix_lengths_are_in_bytes() {
    assert_eq!(common_prefix_len("abc", "abd"), 2);
    assert_eq!(common_prefix_len("abc", "ab"), 2);
    assert_eq!(common_prefix_len("", "ab"), 0);
    assert_eq!(common_prefix_len("\u{2603}a", "\u{2604}a"), 0);
    assert_eq!(common_prefix_len("é1", "é2"), 2);

    assert_eq!(common_suffix_len("xbc", "ybc"), 2);
    assert_eq!(common_suffix_len("bc", "abc"), 2);
    assert_eq!(common_suffix_len("a\u{2603}", "a\u{2604}"), 0);
    assert_eq!(common_suffix_len("1日本", "2日本"), 6);
}

#[test]
fn char_offsets() {
    assert_eq!(char_offset("abc", 1), 1);
    assert_eq!(char_offset("日本", 1), 3);
    assert_eq!(char_offset("日本", 2), 6);
    assert_eq!(char_offset("日本", 5), 6);
}

#[test]
fn long_texts() {
    let old: String = (0..2_000).map(|i| if i % 7 == 0 { 'x' } else { 'a' }).collect();
    let new: String = (0..2_500)
        .map(|i| match i % 11 {
            0 => 'y',
            5 => 'x',
            _ => 'a',
        })
        .collect();

    diff_and_verify(&old, &new);
    diff_and_verify(&new, &old);
}

#[test]
fn operation_tags() {
    for operation in [Operation::Equal, Operation::Insert, Operation::Delete] {
        assert_eq!(Operation::from_tag(operation.tag()), Some(operation));
    }
    assert_eq!(Operation::from_tag('*'), None);
}

#[test]
fn display() {
    assert_eq!(Diff::insert("abc").to_string(), "Diff(Insert,\"abc\")");
    assert_eq!(Diff::equal("").to_string(), "Diff(Equal,\"\")");
}
