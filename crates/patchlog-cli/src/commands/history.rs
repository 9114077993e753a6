use crate::support::{load_change_or_exit, load_tags_or_exit, print_json};
use patchlog_core::compute_all_patch_sets_with;

pub fn run(change: String, config: Option<String>, json: bool) {
    let tags = load_tags_or_exit(config.as_deref());
    let info = load_change_or_exit(&change);
    let patch_sets = compute_all_patch_sets_with(&info, &tags);

    if json {
        print_json(&patch_sets);
        return;
    }

    println!("patchlog history {}", info.number);
    if patch_sets.is_empty() {
        println!("  (no revisions)");
    }
    for ps in &patch_sets {
        let num = ps.num.to_string();
        let wip = match ps.wip {
            Some(true) => " [wip]",
            Some(false) | None => "",
        };
        match &ps.desc {
            Some(desc) => println!("  {:>5}  {}{wip}  {desc}", num, ps.sha),
            None => println!("  {:>5}  {}{wip}", num, ps.sha),
        }
    }
}
