use chainslot::prelude::*;

#[test]
fn prelude_covers_list_and_table() {
    let mut list: ArenaList<&str> = ArenaList::new();
    let id: SlotId = list.insert_after_head("x").unwrap();
    assert_eq!(list.get(id), Some(&"x"));

    let mut table = HashTable::new(HashKind::Elf.hasher());
    table.insert(FixedKey::new("x"), id).unwrap();
    assert_eq!(table.find(&FixedKey::new("x")), Some(&id));
}

#[test]
fn facade_modules_reexport_sub_crates() {
    let config = chainslot::table::TableConfig::default();
    assert_eq!(config.bucket_count, 1009);
    assert_eq!(
        chainslot::list::ListConfig::DEFAULT_GROWTH_FACTOR,
        config.list.growth_factor
    );
}
