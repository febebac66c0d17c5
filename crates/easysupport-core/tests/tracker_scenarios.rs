//! End-to-end scenarios across store, query layer, and persistence.

use easysupport_core::model::{Priority, Status, TicketId};
use easysupport_core::query::{ListView, SortMode, StatusFilter};
use easysupport_core::store::{CommentDraft, TicketDraft, TicketPatch};
use easysupport_core::tracker::Tracker;
use easysupport_core::DEFAULT_STORAGE_KEY;
use easysupport_kv::{FileStore, MemoryStore};

fn draft(title: &str, customer: &str, priority: Priority) -> TicketDraft {
    TicketDraft {
        title: title.to_string(),
        customer_name: customer.to_string(),
        email: format!(
            "{}@example.com",
            customer.to_lowercase().replace(' ', ".")
        ),
        description: format!("{title} needs attention"),
        priority,
    }
}

#[test]
fn create_inserts_at_front_and_date_sort_shows_it_first() {
    let mut tracker = Tracker::open(MemoryStore::new(), DEFAULT_STORAGE_KEY).expect("open");

    // Collection: [{id:1, Open, Low}, {id:2, Open, High}].
    tracker.create(draft("first", "Ann Low", Priority::Low));
    tracker.create(draft("second", "Bea High", Priority::High));

    // Create a Medium ticket: new id 3, inserted at the front.
    let id = tracker.create(draft("third", "Cal Med", Priority::Medium));
    assert_eq!(id, TicketId::new(3));

    let view = ListView::default();
    let page = view.project(tracker.tickets());
    let ids: Vec<u64> = page.visible.iter().map(|t| t.id.get()).collect();
    assert_eq!(ids, [3, 2, 1]);
}

#[test]
fn delete_leaves_exactly_the_other_ids() {
    let mut tracker = Tracker::open(MemoryStore::new(), DEFAULT_STORAGE_KEY).expect("open");
    tracker.create(draft("first", "Ann Low", Priority::Low));
    let second = tracker.create(draft("second", "Bea High", Priority::High));
    tracker.create(draft("third", "Cal Med", Priority::Medium));

    assert!(tracker.delete(second));

    let mut ids: Vec<u64> = tracker.tickets().iter().map(|t| t.id.get()).collect();
    ids.sort_unstable();
    assert_eq!(ids, [1, 3]);
    assert_eq!(tracker.len(), 2);
}

#[test]
fn resolve_then_filter_shows_only_open_tickets() {
    let mut tracker = Tracker::open(MemoryStore::new(), DEFAULT_STORAGE_KEY).expect("open");
    let a = tracker.create(draft("vpn drops", "Ann Low", Priority::Low));
    tracker.create(draft("printer jam", "Bea High", Priority::High));

    assert!(tracker.update(a, TicketPatch::status(Status::Resolved)));

    let mut view = ListView::default();
    view.set_filter(StatusFilter::Only(Status::Open));
    let page = view.project(tracker.tickets());

    assert_eq!(page.filtered_total, 1);
    assert!(page.visible.iter().all(|t| t.status == Status::Open));
    assert_eq!(page.visible[0].title, "printer jam");
}

#[test]
fn priority_sort_never_puts_lower_rank_first() {
    let mut tracker = Tracker::open(MemoryStore::new(), DEFAULT_STORAGE_KEY).expect("open");
    for (title, priority) in [
        ("a", Priority::Low),
        ("b", Priority::High),
        ("c", Priority::Medium),
        ("d", Priority::High),
        ("e", Priority::Low),
        ("f", Priority::Medium),
    ] {
        tracker.create(draft(title, "Pat Query", priority));
    }

    let mut view = ListView::default();
    view.set_sort(SortMode::Priority);
    let page = view.project(tracker.tickets());

    let ranks: Vec<u8> = page.visible.iter().map(|t| t.priority.rank()).collect();
    assert!(ranks.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(page.filtered_total, 6);
}

#[test]
fn search_by_customer_substring_finds_the_ticket() {
    let mut tracker = Tracker::open(MemoryStore::new(), DEFAULT_STORAGE_KEY).expect("open");
    tracker.create(draft("billing question", "Grace Hopper", Priority::Low));
    tracker.create(draft("login broken", "Alan Kay", Priority::High));

    let mut view = ListView::default();
    view.set_search("hopp");
    let page = view.project(tracker.tickets());
    assert_eq!(page.filtered_total, 1);
    assert_eq!(page.visible[0].customer_name, "Grace Hopper");

    view.set_search("no such customer anywhere");
    let page = view.project(tracker.tickets());
    assert_eq!(page.filtered_total, 0);
}

#[test]
fn comments_survive_persistence_through_a_file_store() {
    let dir = tempfile::tempdir().expect("tempdir");

    let id = {
        let kv = FileStore::open(dir.path()).expect("open kv");
        let mut tracker = Tracker::open(kv, DEFAULT_STORAGE_KEY).expect("open tracker");
        let id = tracker.create(draft("flaky wifi", "Mei Wu", Priority::Medium));
        for text in ["rebooted the router", "firmware updated"] {
            assert!(tracker.add_comment(
                id,
                CommentDraft {
                    user: "Support".to_string(),
                    text: text.to_string(),
                }
            ));
        }
        id
    };

    let kv = FileStore::open(dir.path()).expect("reopen kv");
    let tracker = Tracker::open(kv, DEFAULT_STORAGE_KEY).expect("reopen tracker");

    let ticket = tracker.get(id).expect("ticket persisted");
    let texts: Vec<&str> = ticket.comments.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["rebooted the router", "firmware updated"]);
    assert_eq!(ticket.status, Status::Open);
}

#[test]
fn ids_continue_past_the_maximum_after_a_reload() {
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let kv = FileStore::open(dir.path()).expect("open kv");
        let mut tracker = Tracker::open(kv, DEFAULT_STORAGE_KEY).expect("open tracker");
        tracker.create(draft("one", "Ann Low", Priority::Low));
        tracker.create(draft("two", "Bea High", Priority::High));
    }

    let kv = FileStore::open(dir.path()).expect("reopen kv");
    let mut tracker = Tracker::open(kv, DEFAULT_STORAGE_KEY).expect("reopen tracker");
    let id = tracker.create(draft("three", "Cal Med", Priority::Medium));
    assert_eq!(id, TicketId::new(3));
}
