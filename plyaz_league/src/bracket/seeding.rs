//! Standard knockout seeding order.

/// Seeds in bracket order for a bracket of `size` slots.
///
/// Consecutive pairs are first-round matches, with the better seed first
/// (home). Pair positions come from doubling `[1, 2]`: every seed `s` at
/// index `i` becomes `(s, m + 1 - s)` for even `i` and `(m + 1 - s, s)` for
/// odd `i`, where `m` is the new size. Seeds `k` and `size + 1 - k` meet in
/// the first round, and the top two seeds can only meet in the final. For
/// 8 slots this gives 1v8, 4v5, 3v6, 2v7.
///
/// `size` must be a power of two; a size below 2 yields `[1]`.
pub fn seeded_order(size: usize) -> Vec<usize> {
    let mut order = vec![1];
    let mut current = 1;

    while current < size {
        current *= 2;
        let mut next = Vec::with_capacity(current);
        for (idx, &seed) in order.iter().enumerate() {
            let opponent = current + 1 - seed;
            if idx % 2 == 0 {
                next.push(seed);
                next.push(opponent);
            } else {
                next.push(opponent);
                next.push(seed);
            }
        }
        order = next;
    }

    for pair in order.chunks_exact_mut(2) {
        if pair[0] > pair[1] {
            pair.swap(0, 1);
        }
    }

    order
}
