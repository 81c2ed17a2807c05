//! Ranking order for a group table.
//!
//! Criteria, in order:
//! 1. points (desc)
//! 2. goal difference (desc)
//! 3. goals for (desc)
//! 4. goals against (asc)
//! 5. head-to-head between the two tied teams: points, goal difference, goals
//! 6. overall rating (desc)
//! 7. team id (asc)
//!
//! Criteria 1-4 form a total preorder and are applied with a regular stable
//! sort. Head-to-head is pairwise and can be cyclic across three or more
//! teams, so blocks still level after criterion 4 are ordered with an
//! insertion sort, which never requires the comparator to be transitive.

use crate::models::{HeadToHeadRecord, Match, Standing, TeamId};
use std::cmp::{Ordering, Reverse};
use std::collections::HashMap;

fn statistics_key(s: &Standing) -> (Reverse<u32>, Reverse<i32>, Reverse<u32>, u32) {
    (Reverse(s.points), Reverse(s.goal_difference()), Reverse(s.goals_for), s.goals_against)
}

/// Criteria 1-4. `Less` means `a` ranks above `b`.
pub fn compare_statistics(a: &Standing, b: &Standing) -> Ordering {
    statistics_key(a).cmp(&statistics_key(b))
}

/// Criterion 5, restricted to played matches between exactly `a` and `b`.
pub fn compare_head_to_head(a: TeamId, b: TeamId, matches: &[Match]) -> Ordering {
    let record = HeadToHeadRecord::between(a, b, matches);
    if record.matches_played == 0 {
        return Ordering::Equal;
    }
    record
        .b_points
        .cmp(&record.a_points)
        .then(record.b_goal_difference().cmp(&record.a_goal_difference()))
        .then(record.b_goals.cmp(&record.a_goals))
}

/// Criteria 5-7.
pub fn compare_tied(
    a: &Standing,
    b: &Standing,
    matches: &[Match],
    ratings: &HashMap<TeamId, u8>,
) -> Ordering {
    let rating = |team: TeamId| ratings.get(&team).copied().unwrap_or(0);
    compare_head_to_head(a.team, b.team, matches)
        .then(rating(b.team).cmp(&rating(a.team)))
        .then(a.team.cmp(&b.team))
}

/// Sorts `standings` into final table order.
pub fn rank(standings: &mut [Standing], matches: &[Match], ratings: &HashMap<TeamId, u8>) {
    standings.sort_by(compare_statistics);

    let mut start = 0;
    while start < standings.len() {
        let mut end = start + 1;
        while end < standings.len()
            && compare_statistics(&standings[start], &standings[end]) == Ordering::Equal
        {
            end += 1;
        }
        if end - start > 1 {
            insertion_sort_by(&mut standings[start..end], |a, b| {
                compare_tied(a, b, matches, ratings)
            });
        }
        start = end;
    }
}

fn insertion_sort_by<T, F>(items: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}
