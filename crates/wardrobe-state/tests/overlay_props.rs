use proptest::prelude::*;
use wardrobe_core::{
    ActorId, AppearanceSnapshot, ApplyMask, Customize, CustomizeIndex, Design, EquipItem,
    EquipSlot, MetaFlag, MetaFlags,
};
use wardrobe_state::{OverlayEngine, RevertStateStore};

fn snapshot_strategy() -> impl Strategy<Value = AppearanceSnapshot> {
    (
        prop::array::uniform12((any::<u32>(), any::<u8>())),
        prop::array::uniform26(any::<u8>()),
        prop_oneof![Just(0u32), 1..5000u32],
        any::<[bool; 4]>(),
    )
        .prop_map(|(items, customize, model_id, meta)| {
            let mut snapshot = AppearanceSnapshot {
                customize: Customize(customize),
                model_id,
                meta: MetaFlags {
                    hat_visible: meta[0],
                    visor_toggled: meta[1],
                    weapon_visible: meta[2],
                    is_wet: meta[3],
                },
                ..AppearanceSnapshot::default()
            };
            for (slot, (id, stain)) in EquipSlot::ALL.into_iter().zip(items) {
                snapshot.set_item(slot, EquipItem::new(id, stain));
            }
            snapshot
        })
}

fn customize_mask_strategy() -> impl Strategy<Value = [bool; CustomizeIndex::COUNT]> {
    prop::array::uniform26(any::<bool>())
}

proptest! {
    #[test]
    fn empty_mask_is_identity(
        target in snapshot_strategy(),
        source in snapshot_strategy(),
    ) {
        let design = Design::anonymous(source, ApplyMask::none());
        prop_assert_eq!(OverlayEngine::default().apply(&target, &design), target);
    }

    // Fields merge one by one: with the model bit cleared the target keeps its
    // model id; every other field is the design's.
    #[test]
    fn full_mask_without_model_is_total(
        target in snapshot_strategy(),
        source in snapshot_strategy(),
    ) {
        let mut mask = ApplyMask::all();
        mask.set_model(false);
        let design = Design::anonymous(source, mask);
        let result = OverlayEngine::default().apply(&target, &design);

        prop_assert_eq!(result.equipment, source.equipment);
        prop_assert_eq!(result.customize, source.customize);
        prop_assert_eq!(result.meta, source.meta);
        prop_assert_eq!(result.model_id, target.model_id);
    }

    #[test]
    fn full_mask_on_same_model_returns_design(
        target in snapshot_strategy(),
        source in snapshot_strategy(),
    ) {
        let mut mask = ApplyMask::all();
        mask.set_model(false);
        let source = AppearanceSnapshot { model_id: target.model_id, ..source };
        let design = Design::anonymous(source, mask);
        prop_assert_eq!(OverlayEngine::default().apply(&target, &design), source);
    }

    #[test]
    fn nonhuman_model_keeps_target_customize(
        target in snapshot_strategy(),
        source in snapshot_strategy(),
        bits in customize_mask_strategy(),
        model_id in 1..u32::MAX,
    ) {
        let mut mask = ApplyMask::none();
        mask.set_model(true);
        for (index, apply) in CustomizeIndex::ALL.into_iter().zip(bits) {
            mask.set_customize(index, apply);
        }
        let source = AppearanceSnapshot { model_id, ..source };
        let result = OverlayEngine::default().apply(&target, &Design::anonymous(source, mask));

        prop_assert_eq!(result.customize, target.customize);
        prop_assert_eq!(result.model_id, model_id);
    }

    #[test]
    fn fields_merge_independently(
        target in snapshot_strategy(),
        source in snapshot_strategy(),
        slot_index in 0..EquipSlot::COUNT,
        flag_index in 0..MetaFlag::COUNT,
    ) {
        let slot = EquipSlot::ALL[slot_index];
        let flag = MetaFlag::ALL[flag_index];
        let mut mask = ApplyMask::none();
        mask.set_stain(slot, true);
        mask.set_meta(flag, true);

        let result = OverlayEngine::default().apply(&target, &Design::anonymous(source, mask));
        for other in EquipSlot::ALL {
            let expected = if other == slot {
                target.item(other).with_stain(source.item(other).stain)
            } else {
                target.item(other)
            };
            prop_assert_eq!(result.item(other), expected);
        }
        prop_assert_eq!(result.meta.get(flag), source.meta.get(flag));
        prop_assert_eq!(result.customize, target.customize);
    }

    #[test]
    fn baseline_survives_repeated_overrides(
        live in prop::collection::vec(snapshot_strategy(), 1..6),
    ) {
        let store = RevertStateStore::new();
        let actor = ActorId::new("Actor", 1, 0);
        for snapshot in &live {
            store.ensure_baseline(&actor, snapshot);
        }
        prop_assert_eq!(store.revert(&actor).unwrap(), live[0]);
        prop_assert!(store.revert(&actor).is_err());
    }
}
