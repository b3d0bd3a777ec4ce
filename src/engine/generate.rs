use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;

use crate::world::{Coord, ExitDir, Room, RoomConfig};

/// Fraction of cells targeted by cavern wall generation.
pub const WALL_DENSITY: f64 = 0.25;

/// One uniformly random coordinate strictly inside the border.
fn interior(rng: &mut impl Rng, width: i32, height: i32) -> Coord {
    Coord::new(rng.gen_range(1..=width - 2), rng.gen_range(1..=height - 2))
}

/// One interior coordinate per declared loot/enemy entry. Overlaps are
/// allowed; nothing avoids walls or earlier placements.
pub fn scatter(rng: &mut impl Rng, count: usize, width: i32, height: i32) -> Vec<Coord> {
    (0..count).map(|_| interior(rng, width, height)).collect()
}

/// Cavern walls come in pairs: an interior anchor plus a partner offset by an
/// independent choice in {-1, 0, 1} on each axis. The offset can land the
/// partner on the border row/column, and duplicates are allowed. The result
/// length is always even: 2 * (trunc(width * height * density) / 2).
pub fn gen_cavern(rng: &mut impl Rng, width: i32, height: i32) -> Vec<Coord> {
    let n = ((width * height) as f64 * WALL_DENSITY) as usize / 2;
    let mut out = Vec::with_capacity(n * 2);

    for _ in 0..n {
        let anchor = interior(rng, width, height);
        let partner = Coord::new(
            anchor.x + rng.gen_range(-1..=1),
            anchor.y + rng.gen_range(-1..=1),
        );
        out.push(anchor);
        out.push(partner);
    }

    out
}

/// Place declared exits on the border. North and south land on the top and
/// bottom edges. Two long-standing quirks are kept on purpose so existing
/// scripts keep producing the layouts their authors tuned for, and both are
/// logged instead of silently falling through:
/// - east exits are computed but never placed;
/// - west exits key their x off the room *height*.
pub fn place_exits(
    rng: &mut impl Rng,
    tags: &[ExitDir],
    width: i32,
    height: i32,
    room_name: &str,
) -> Vec<Coord> {
    let mut out = Vec::new();

    for tag in tags {
        match tag {
            ExitDir::North => out.push(Coord::new(rng.gen_range(1..=width - 2), 0)),
            ExitDir::South => out.push(Coord::new(rng.gen_range(1..=width - 2), height)),
            ExitDir::East => {
                let dropped = Coord::new(width, rng.gen_range(1..=height - 2));
                warn!(
                    "room '{}': east exit at ({}, {}) is not generated (known layout gap)",
                    room_name, dropped.x, dropped.y
                );
            }
            ExitDir::West => {
                let exit = Coord::new(height, rng.gen_range(1..=height - 2));
                debug!(
                    "room '{}': west exit keys x off height: ({}, {})",
                    room_name, exit.x, exit.y
                );
                out.push(exit);
            }
        }
    }

    out
}

/// Build a room's full layout from its declaration. No reachability check:
/// generation can and does produce unsolvable rooms.
pub fn build_room(rng: &mut impl Rng, cfg: &RoomConfig) -> Room {
    let walls: HashSet<Coord> = gen_cavern(rng, cfg.width, cfg.height).into_iter().collect();
    let loot: HashSet<Coord> = scatter(rng, cfg.loot.len(), cfg.width, cfg.height)
        .into_iter()
        .collect();
    let enemies: Option<HashSet<Coord>> = cfg.enemies.as_ref().map(|list| {
        scatter(rng, list.len(), cfg.width, cfg.height)
            .into_iter()
            .collect()
    });
    let exits: HashSet<Coord> = place_exits(rng, &cfg.exits, cfg.width, cfg.height, &cfg.name)
        .into_iter()
        .collect();

    debug!(
        "room '{}': {} wall cells, {} loot, {} enemies, {} exits",
        cfg.name,
        walls.len(),
        loot.len(),
        enemies.as_ref().map_or(0, |e| e.len()),
        exits.len()
    );

    Room {
        name: cfg.name.clone(),
        width: cfg.width,
        height: cfg.height,
        walls,
        loot,
        enemies,
        exits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn scatter_stays_strictly_interior() {
        for seed in 0..20 {
            for &(w, h) in &[(3, 3), (5, 4), (10, 10), (12, 3)] {
                let mut r = rng(seed);
                for c in scatter(&mut r, 50, w, h) {
                    assert!(c.x >= 1 && c.x <= w - 2, "x {} out of range for w {}", c.x, w);
                    assert!(c.y >= 1 && c.y <= h - 2, "y {} out of range for h {}", c.y, h);
                }
            }
        }
    }

    #[test]
    fn cavern_yields_the_exact_paired_count() {
        // trunc(w * h * 0.25) / 2 pairs.
        for &(w, h, expected) in &[(10, 10, 24), (5, 5, 6), (7, 9, 14), (3, 3, 2)] {
            let mut r = rng(1);
            assert_eq!(gen_cavern(&mut r, w, h).len(), expected);
        }
    }

    #[test]
    fn cavern_partners_stay_within_one_cell_of_anchor() {
        let mut r = rng(3);
        let walls = gen_cavern(&mut r, 8, 8);
        for pair in walls.chunks(2) {
            let (anchor, partner) = (pair[0], pair[1]);
            assert!((anchor.x - partner.x).abs() <= 1);
            assert!((anchor.y - partner.y).abs() <= 1);
            // Anchors are interior; partners may touch the border but not leave it.
            assert!(partner.x >= 0 && partner.x <= 7);
            assert!(partner.y >= 0 && partner.y <= 7);
        }
    }

    #[test]
    fn north_and_south_exits_sit_on_their_edges() {
        for seed in 0..20 {
            let mut r = rng(seed);
            let exits = place_exits(&mut r, &[ExitDir::North, ExitDir::South], 9, 6, "t");
            assert_eq!(exits.len(), 2);
            assert_eq!(exits[0].y, 0);
            assert!(exits[0].x >= 1 && exits[0].x <= 7);
            assert_eq!(exits[1].y, 6);
            assert!(exits[1].x >= 1 && exits[1].x <= 7);
        }
    }

    #[test]
    fn east_exits_never_materialize() {
        // Regression fence for the known dead branch.
        let mut r = rng(5);
        let exits = place_exits(&mut r, &[ExitDir::East, ExitDir::East], 9, 6, "t");
        assert!(exits.is_empty());
    }

    #[test]
    fn west_exits_are_appended_with_height_as_x() {
        for seed in 0..20 {
            let mut r = rng(seed);
            let exits = place_exits(&mut r, &[ExitDir::West], 9, 6, "t");
            assert_eq!(exits.len(), 1);
            assert_eq!(exits[0].x, 6);
            assert!(exits[0].y >= 1 && exits[0].y <= 4);
        }
    }

    #[test]
    fn five_by_five_north_room_has_one_top_edge_exit() {
        for seed in 0..50 {
            let mut r = rng(seed);
            let exits = place_exits(&mut r, &[ExitDir::North], 5, 5, "t");
            assert_eq!(exits.len(), 1);
            assert_eq!(exits[0].y, 0);
            assert!(exits[0].x >= 1 && exits[0].x <= 3);
        }
    }

    #[test]
    fn enemy_presence_is_polymorphic() {
        let absent = RoomConfig {
            name: "a".into(),
            width: 6,
            height: 6,
            loot: vec![],
            enemies: None,
            exits: vec![],
        };
        let declared_empty = RoomConfig {
            enemies: Some(vec![]),
            name: "b".into(),
            ..absent_clone(&absent)
        };

        let mut r = rng(9);
        assert!(build_room(&mut r, &absent).enemies.is_none());
        let room = build_room(&mut r, &declared_empty);
        assert_eq!(room.enemies.map(|e| e.len()), Some(0));
    }

    fn absent_clone(cfg: &RoomConfig) -> RoomConfig {
        RoomConfig {
            name: cfg.name.clone(),
            width: cfg.width,
            height: cfg.height,
            loot: cfg.loot.clone(),
            enemies: cfg.enemies.clone(),
            exits: cfg.exits.clone(),
        }
    }
}
