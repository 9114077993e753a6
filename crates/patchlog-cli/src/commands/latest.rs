use crate::support::{load_change_or_exit, print_json, yes_no};
use patchlog_core::{
    compute_all_patch_sets, compute_latest_patch_num, find_edit_parent_patch_num,
    has_edit_based_on_current_patch_set,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LatestView {
    change: u64,
    latest: Option<u32>,
    edit_parent: Option<u32>,
    edit_on_current: bool,
}

pub fn run(change: String, json: bool) {
    let info = load_change_or_exit(&change);
    let patch_sets = compute_all_patch_sets(&info);
    let revisions: Vec<_> = info.revisions.values().collect();

    let view = LatestView {
        change: info.number,
        latest: compute_latest_patch_num(&patch_sets),
        edit_parent: find_edit_parent_patch_num(&revisions),
        edit_on_current: has_edit_based_on_current_patch_set(&patch_sets),
    };

    if json {
        print_json(&view);
        return;
    }

    println!("patchlog latest {}", view.change);
    match view.latest {
        Some(latest) => println!("  latest patch set: {latest}"),
        None => println!("  latest patch set: (none)"),
    }
    match view.edit_parent {
        Some(parent) => println!("  change edit based on: {parent}"),
        None => println!("  change edit based on: (none)"),
    }
    println!("  edit on current: {}", yes_no(view.edit_on_current));
}
