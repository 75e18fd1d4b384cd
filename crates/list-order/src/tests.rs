//! End-to-end ordering scenarios
//!
//! Filter -> split -> per-section order, the way the list view drives it.

use crate::{
    filter_items, max_stored_id, split_sections, FilterCriteria, Item, ItemId, Label,
    MemoryPersistence, OrderConfig, OrderPersistence, OrderStore, OrderedSection, Section,
};

fn ids_of(items: &[Item]) -> Vec<ItemId> {
    items.iter().map(|i| i.id).collect()
}

fn row_ids(section: &OrderedSection<MemoryPersistence>, items: &[Item]) -> Vec<ItemId> {
    section.rows(items).iter().map(|r| r.item.id).collect()
}

#[test]
fn test_seed_reconcile_then_move() {
    let mut store = OrderStore::seed(None, &[3, 1, 2]);
    store.reconcile(&[3, 1, 2, 5]);
    assert_eq!(store.ids(), vec![3, 1, 2, 5]);
    store.move_to(2, 0);
    assert_eq!(store.ids(), vec![2, 3, 1, 5]);
}

#[test]
fn test_persistence_round_trip() {
    let storage = MemoryPersistence::new();
    storage.save("order-in-progress", &[5, 2, 9]).unwrap();
    assert_eq!(storage.load("order-in-progress").unwrap(), Some(vec![5, 2, 9]));
}

#[test]
fn test_order_survives_reload() {
    let storage = MemoryPersistence::new();
    let config = OrderConfig::default();
    let items = vec![Item::new(1, "a"), Item::new(2, "b"), Item::new(3, "c")];

    let mut section =
        OrderedSection::open(&config, Section::InProgress, storage.clone(), &ids_of(&items));
    section.drag_start(3);
    section.drag_enter(1);
    section.drag_end();
    assert_eq!(row_ids(&section, &items), vec![3, 1, 2]);
    drop(section);

    // Natural order differs, the stored order wins
    let reopened = OrderedSection::open(&config, Section::InProgress, storage, &[1, 2, 3]);
    assert_eq!(row_ids(&reopened, &items), vec![3, 1, 2]);
}

#[test]
fn test_filtered_out_items_keep_their_slot() {
    let storage = MemoryPersistence::new();
    let config = OrderConfig::default();
    let items = vec![
        Item::new(1, "buy milk").with_label(Label::Red),
        Item::new(2, "walk dog"),
        Item::new(3, "buy stamps").with_label(Label::Red),
    ];

    let mut section = OrderedSection::open(&config, Section::InProgress, storage, &ids_of(&items));
    section.move_to(3, 0);

    let criteria = FilterCriteria::from_query("buy", Some(Label::Red));
    let visible = filter_items(&items, &criteria);
    section.reconcile(&ids_of(&visible));
    assert_eq!(row_ids(&section, &visible), vec![3, 1]);

    let all = filter_items(&items, &FilterCriteria::default());
    section.reconcile(&ids_of(&all));
    assert_eq!(row_ids(&section, &all), vec![3, 1, 2]);
}

#[test]
fn test_completing_an_item_moves_it_between_sections() {
    let storage = MemoryPersistence::new();
    let config = OrderConfig::default();
    let mut items = vec![Item::new(1, "a"), Item::new(2, "b"), Item::new(3, "c").completed()];

    let split = split_sections(&items);
    let natural_open = ids_of(&split.in_progress);
    let natural_done = ids_of(&split.completed);
    let mut open =
        OrderedSection::open(&config, Section::InProgress, storage.clone(), &natural_open);
    let mut done =
        OrderedSection::open(&config, Section::Completed, storage.clone(), &natural_done);

    items[0].completed = true;
    let split = split_sections(&items);
    open.reconcile(&ids_of(&split.in_progress));
    done.reconcile(&ids_of(&split.completed));

    assert_eq!(row_ids(&open, &split.in_progress), vec![2]);
    assert_eq!(row_ids(&done, &split.completed), vec![3, 1]);
    // Stale id 1 stays remembered in the in-progress order
    assert_eq!(open.store().ids(), vec![1, 2]);
}

#[test]
fn test_new_items_appear_at_the_end() {
    let storage = MemoryPersistence::new();
    let mut items = vec![Item::new(1, "a"), Item::new(2, "b")];
    let config = OrderConfig::default();
    let mut section = OrderedSection::open(&config, Section::InProgress, storage, &[1, 2]);
    section.move_to(2, 0);

    items.push(Item::new(7, "new"));
    items.insert(0, Item::new(6, "newer"));
    section.reconcile(&ids_of(&items));
    assert_eq!(row_ids(&section, &items), vec![2, 1, 6, 7]);
}

#[test]
fn test_item_created_after_reload_lands_at_the_end() {
    let storage = MemoryPersistence::new();
    let config = OrderConfig::default();

    // First visit: item 6 is added, dragged to the top, then deleted
    let mut section =
        OrderedSection::open(&config, Section::InProgress, storage.clone(), &[1, 2, 3, 4]);
    section.reconcile(&[1, 2, 3, 4, 6]);
    section.move_to(6, 0);
    section.reconcile(&[1, 2, 3, 4]);
    drop(section);

    // Second visit: the next id has to clear everything the saved order remembers
    let next_id = max_stored_id(&storage, &config.key_prefix).unwrap_or(0).max(4) + 1;
    assert_eq!(next_id, 7);

    let mut section =
        OrderedSection::open(&config, Section::InProgress, storage, &[1, 2, 3, 4]);
    let items: Vec<Item> = (1..=4).chain([next_id]).map(|id| Item::new(id, "x")).collect();
    section.reconcile(&ids_of(&items));
    assert_eq!(row_ids(&section, &items), vec![1, 2, 3, 4, 7]);
    assert_eq!(section.store().position(next_id), Some(5));
}
