// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Exhaustive and random k-subsets of a deck.
use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::{Card, Deck};

/// The largest subset size, a full 7 cards hand.
const MAX_K: usize = 7;

/// Creates table for nck(n, k) for n <= 52 and k <= 7.
const fn make_nck() -> [[u32; MAX_K + 1]; Deck::SIZE + 1] {
    let mut t = [[0u32; MAX_K + 1]; Deck::SIZE + 1];
    let mut n = 0;

    while n <= Deck::SIZE {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= MAX_K && k <= n {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; MAX_K + 1]; Deck::SIZE + 1] = make_nck();

/// Returns the binomial coefficient for n choose k.
///
/// Panics if n > 52 or k > 7.
#[inline]
pub fn nck(n: usize, k: usize) -> usize {
    assert!(n <= Deck::SIZE, "n={n} must be 0 <= n <= 52");
    assert!(k <= MAX_K, "k={k} must be 0 <= k <= 7");
    NCKS[n][k] as usize
}

/// Calls the given closure with the indices of each k-subset of 0..n.
fn for_each_ksubset<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    debug_assert!(0 < k && k <= n);

    // Algorithm L from TAOCP 4a, c[1..=k] is the current combination while
    // c[k + 1] = n and c[k + 2] = 0 are the sentinels.
    let mut c = vec![0usize; k + 3];
    for (j, cj) in c.iter_mut().enumerate().take(k + 1).skip(1) {
        *cj = j - 1;
    }

    c[k + 1] = n;

    loop {
        f(&c[1..=k]);

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}

impl Deck {
    /// Calls the `f` closure for each k-cards subset of this deck.
    ///
    /// Every one of the nck(n, k) subsets is visited exactly once, for k = 0
    /// the closure is called once with an empty slice and for k > n it is never
    /// called.
    ///
    /// Panics if k > 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!(k <= MAX_K, "k={k} must be 0 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        if k == 0 {
            f(&[]);
            return;
        }

        let mut h = [self.cards[0]; MAX_K];
        for_each_ksubset(n, k, |p| {
            for (idx, &pos) in p.iter().enumerate() {
                h[idx] = self.cards[pos];
            }

            f(&h[..k]);
        });
    }

    /// Calls the `f` closure `samples` times with a random k-cards subset of
    /// this deck, using a generator seeded from the OS.
    ///
    /// Panics if k > 7.
    pub fn sample<F>(&self, samples: usize, k: usize, f: F)
    where
        F: FnMut(&[Card]),
    {
        let mut rng = SmallRng::from_os_rng();
        self.sample_with(&mut rng, samples, k, f);
    }

    /// Calls the `f` closure `samples` times with a random k-cards subset of
    /// this deck drawn with the given generator.
    ///
    /// Each subset is a uniform draw without replacement, independent from the
    /// previous ones. For k > n the closure is never called.
    ///
    /// Panics if k > 7.
    pub fn sample_with<R, F>(&self, rng: &mut R, samples: usize, k: usize, mut f: F)
    where
        R: Rng,
        F: FnMut(&[Card]),
    {
        assert!(k <= MAX_K, "k={k} must be 0 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut cards = self.cards.clone();
        for _ in 0..samples {
            // Partial Fisher-Yates, the first k cards are the sample.
            for i in 0..k {
                let j = rng.random_range(i..n);
                cards.swap(i, j);
            }

            f(&cards[..k]);
        }
    }
}
