use sprite_atlas_core::model::{Frame, Rect, SourceSpec};
use sprite_atlas_core::packer::Packer;
use sprite_atlas_core::packer::shelf::ShelfPacker;

fn disjoint(frames: &[Frame]) -> bool {
    for i in 0..frames.len() {
        for j in (i + 1)..frames.len() {
            if frames[i].frame.intersects(&frames[j].frame) {
                return false;
            }
        }
    }
    true
}

#[test]
fn shelf_golden_trace() {
    let sources = vec![
        SourceSpec::new("a", 100, 50),
        SourceSpec::new("b", 80, 60),
        SourceSpec::new("c", 50, 50),
    ];
    let layout = ShelfPacker::new().pack(&sources, 2);

    // Sorted by width desc the cursor wraps before "b" and "c": each row
    // would outgrow the 104px established by the first row.
    assert_eq!(layout.frame("a").unwrap().frame, Rect::new(2, 2, 100, 50));
    assert_eq!(layout.frame("b").unwrap().frame, Rect::new(2, 54, 80, 60));
    assert_eq!(layout.frame("c").unwrap().frame, Rect::new(2, 116, 50, 50));
    assert_eq!((layout.width, layout.height), (104, 168));
    assert!(layout.unplaced.is_empty());
}

#[test]
fn shelf_fills_later_rows() {
    let sources = vec![
        SourceSpec::new("wide", 100, 10),
        SourceSpec::new("a", 40, 10),
        SourceSpec::new("b", 40, 10),
    ];
    let layout = ShelfPacker::new().pack(&sources, 2);

    assert_eq!(layout.frame("wide").unwrap().frame, Rect::new(2, 2, 100, 10));
    assert_eq!(layout.frame("a").unwrap().frame, Rect::new(2, 14, 40, 10));
    // 44 + 40 + 2 <= 104, so "b" shares the second row.
    assert_eq!(layout.frame("b").unwrap().frame, Rect::new(44, 14, 40, 10));
    assert_eq!((layout.width, layout.height), (104, 26));
}

#[test]
fn shelf_ties_keep_input_order() {
    let sources = vec![
        SourceSpec::new("first", 64, 10),
        SourceSpec::new("second", 64, 10),
    ];
    let layout = ShelfPacker::new().pack(&sources, 0);
    let first = layout.frame("first").unwrap().frame;
    let second = layout.frame("second").unwrap().frame;
    assert!(first.y < second.y, "stable sort must keep input order");
}

#[test]
fn shelf_zero_sources() {
    let layout = ShelfPacker::new().pack(&[], 2);
    assert_eq!((layout.width, layout.height), (4, 4));
    assert!(layout.frames.is_empty());
    assert!(layout.unplaced.is_empty());
}

#[test]
fn shelf_repeatable_and_disjoint() {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);

    let sources: Vec<SourceSpec> = (0..120)
        .map(|i| {
            let w = rng.gen_range(4..=64);
            let h = rng.gen_range(4..=64);
            SourceSpec::new(format!("r{}", i), w, h)
        })
        .collect();

    let l1 = ShelfPacker::new().pack(&sources, 2);
    let l2 = ShelfPacker::new().pack(&sources, 2);

    assert_eq!(l1.frames.len(), sources.len());
    assert_eq!((l1.width, l1.height), (l2.width, l2.height));
    for (a, b) in l1.frames.iter().zip(l2.frames.iter()) {
        assert_eq!(a.key, b.key);
        assert_eq!(a.frame, b.frame);
    }

    assert!(disjoint(&l1.frames));
    let bin = Rect::new(0, 0, l1.width, l1.height);
    for f in &l1.frames {
        assert!(bin.contains(&f.frame), "{} escapes the bin", f.key);
    }
}
