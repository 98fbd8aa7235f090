use retention_console::channel_list::{ChannelListModel, Command, ListInputs};
use retention_console::grid::{Cell, ChannelIcon};
use retention_console::PAGE_SIZE;
use retention_core::channel::{Channel, ChannelKind};

fn channel(id: &str) -> Channel {
    Channel {
        id: id.to_owned(),
        name: id.to_lowercase(),
        display_name: id.to_owned(),
        team_display_name: "Core".to_owned(),
        kind: ChannelKind::Public,
        delete_at: 0,
    }
}

#[test]
fn grid_projection_shows_staged_edits_merged_into_the_page() {
    let mut inputs = ListInputs {
        channels: ["A", "B", "C", "D", "E"].iter().map(|id| channel(id)).collect(),
        total: 5,
        policy_id: Some("policy-1".to_owned()),
        ..ListInputs::default()
    };
    inputs.pending.stage_remove(channel("B"));
    inputs.pending.stage_add(channel("X"));

    let mut model = ChannelListModel::new();
    let (view, command) = model.grid_view(&inputs);

    assert!(command.is_none());
    let ids: Vec<&str> = view.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["X", "A", "C", "D", "E"]);
    assert_eq!((view.window.start, view.window.end, view.window.total), (1, 5, 5));

    let Cell::ChannelName { icon, display_name, .. } = &view.rows[0].cells[0].1 else {
        panic!("first cell must be the channel name");
    };
    assert_eq!(*icon, ChannelIcon::Globe);
    assert_eq!(display_name, "X");
}

#[test]
fn walking_forward_through_removals_backfills_later_pages() {
    // 3 server pages; the first two are local. Staging a full page of
    // removals shifts which server page backs the visible window.
    let mut inputs = ListInputs {
        channels: (0..20).map(|i| channel(&format!("ch-{i:02}"))).collect(),
        total: 30,
        policy_id: Some("policy-1".to_owned()),
        ..ListInputs::default()
    };
    for i in 0..PAGE_SIZE {
        inputs.pending.stage_remove(channel(&format!("ch-{i:02}")));
    }

    let mut model = ChannelListModel::new();
    let (rows, command) = model.visible_rows(&inputs);
    // Page 0 now shows the second local page; the window is still full.
    assert_eq!(rows[0].id, "ch-10");
    assert_eq!(rows.len(), PAGE_SIZE);
    assert!(command.is_none());

    // Page 1 has no local rows left; a whole page of removals shifts the
    // backfill target one past the naive next page.
    let next = model.next_page(&inputs);
    assert_eq!(
        next,
        Command::LoadPage {
            page: 2,
            per_page: PAGE_SIZE,
        }
    );
    let (rows, command) = model.visible_rows(&inputs);
    assert!(rows.is_empty());
    assert_eq!(
        command,
        Command::LoadPage {
            page: 3,
            per_page: PAGE_SIZE,
        }
    );

    // The same short window does not re-request the page.
    let (_, command) = model.visible_rows(&inputs);
    assert!(command.is_none());
}

#[test]
fn effective_total_and_window_stay_consistent_across_edits() {
    let mut inputs = ListInputs {
        channels: (0..10).map(|i| channel(&format!("ch-{i}"))).collect(),
        total: 40,
        policy_id: Some("policy-1".to_owned()),
        ..ListInputs::default()
    };
    let model = ChannelListModel::new();
    assert_eq!(model.effective_total(&inputs), 40);

    inputs.pending.stage_add(channel("X"));
    inputs.pending.stage_add(channel("Y"));
    inputs.pending.stage_add(channel("Z"));
    inputs.pending.stage_remove(channel("ch-1"));
    assert_eq!(model.effective_total(&inputs), 42);

    let win = model.pagination(&inputs);
    assert_eq!((win.start, win.end, win.total), (1, PAGE_SIZE, 42));
}
