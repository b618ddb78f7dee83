use ahash::HashSet;
use lazy_combinatorics::{
    Combinatorics, all_permutations, combinations, combinations_with_replacement,
    heap_permutations, permutations, product,
};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn joined(it: impl Iterator<Item = Vec<char>>) -> Vec<String> {
    it.map(String::from_iter).collect()
}

#[test]
fn documented_orders() {
    let abcd = chars("ABCD");
    assert_eq!(
        joined(combinations(&abcd, 2)),
        ["AB", "AC", "AD", "BC", "BD", "CD"]
    );
    assert_eq!(
        joined(permutations(&abcd, 2)),
        ["AB", "AC", "AD", "BA", "BC", "BD", "CA", "CB", "CD", "DA", "DB", "DC"]
    );
    assert_eq!(
        joined(combinations_with_replacement(&abcd, 2)),
        ["AA", "AB", "AC", "AD", "BB", "BC", "BD", "CC", "CD", "DD"]
    );
    assert_eq!(
        joined(product([chars("AB"), chars("xy")])),
        ["Ax", "Ay", "Bx", "By"]
    );
}

#[test]
fn heap_matches_ordered_permutations() -> anyhow::Result<()> {
    let mut buffer = chars("wxyzq");
    let ordered: HashSet<String> = joined(all_permutations(&buffer)).into_iter().collect();
    let heap = heap_permutations(&mut buffer, 5)?;
    assert_eq!(heap.len(), 120);

    let heap: HashSet<String> = heap.into_iter().collect();
    assert_eq!(heap.len(), 120);
    assert_eq!(heap, ordered);
    Ok(())
}

#[test]
fn independent_generators_agree() {
    let input: Vec<u16> = (0..7).collect();
    let a: Vec<_> = input.permutations(3).collect();
    let b: Vec<_> = input.permutations(3).collect();
    assert_eq!(a, b);

    let a: Vec<_> = input.combinations(4).collect();
    let b: Vec<_> = input.combinations(4).collect();
    assert_eq!(a, b);

    let a: Vec<_> = input.combinations_with_replacement(3).collect();
    let b: Vec<_> = input.combinations_with_replacement(3).collect();
    assert_eq!(a.len(), 84);
    assert_eq!(a, b);

    let a: Vec<_> = product([&input[..3], &input[2..], &input[..2]]).collect();
    let b: Vec<_> = product([&input[..3], &input[2..], &input[..2]]).collect();
    assert_eq!(a.len(), 30);
    assert_eq!(a, b);
}

#[test]
fn partial_and_zero_consumption() {
    let input = chars("ABCDEFG");
    let _unused = combinations(&input, 3);

    let first: Vec<String> = joined(permutations(&input, 3).take(2));
    assert_eq!(first, ["ABC", "ABD"]);

    let mut it = combinations_with_replacement(&input, 2);
    assert_eq!(it.nth(7), Some(vec!['B', 'B']));
}

#[test]
fn unsorted_input_keeps_positions() {
    let input = chars("DCBA");
    assert_eq!(
        joined(combinations(&input, 3)),
        ["DCB", "DCA", "DBA", "CBA"]
    );
}
