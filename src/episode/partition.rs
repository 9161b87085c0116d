// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Number of episodes highlighted in the latest section
pub const LATEST_EPISODE_COUNT: usize = 2;

/// Split episodes into the latest ones and the rest
pub fn partition<T>(items: Vec<T>) -> (Vec<T>, Vec<T>) {
    partition_at(items, LATEST_EPISODE_COUNT)
}

/// Split off the first `count` items, or all of them if there are fewer
pub fn partition_at<T>(mut items: Vec<T>, count: usize) -> (Vec<T>, Vec<T>) {
    let rest = items.split_off(count.min(items.len()));
    (items, rest)
}
