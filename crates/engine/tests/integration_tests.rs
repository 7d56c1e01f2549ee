//! Integration tests for octopack-engine.

use approx::assert_relative_eq;
use octopack_core::geometry::{Dimensions, Point3D};
use octopack_engine::generator::random_items;
use octopack_engine::{Config, Container, Item, PackingResult, Packer3D, Strategy};

fn item(id: &str, w: f64, h: f64, d: f64) -> Item {
    Item::new(id, w, h, d).unwrap()
}

fn cube_container(size: f64) -> Container {
    Container::new("bin", size, size, size).unwrap()
}

fn packer(strategy: Strategy) -> Packer3D {
    Packer3D::new(Config::new().with_strategy(strategy)).unwrap()
}

fn assert_valid_layout(result: &PackingResult, container: &Container) {
    let placements = result.placements();
    for (i, a) in placements.iter().enumerate() {
        assert!(
            container.aabb().contains(&a.aabb()),
            "'{}' leaves the container",
            a.item_id
        );
        for b in &placements[i + 1..] {
            if a.container_index == b.container_index {
                assert!(
                    !a.aabb().intersects(&b.aabb()),
                    "'{}' and '{}' overlap",
                    a.item_id,
                    b.item_id
                );
            }
        }
    }
}

/// Items from the mixed-size demo: 10x10x10 container, five boxes.
fn scenario_a() -> Vec<Item> {
    vec![
        item("A1", 3.0, 3.0, 3.0),
        item("A2", 2.0, 4.0, 2.0),
        item("A3", 1.0, 1.0, 8.0),
        item("A4", 4.0, 2.0, 3.0),
        item("A5", 2.0, 2.0, 2.0),
    ]
}

mod feasibility {
    use super::*;

    #[test]
    fn test_volume_fast_reject() {
        let container = cube_container(10.0);
        let items = vec![item("big", 9.0, 9.0, 9.0), item("more", 7.0, 7.0, 7.0)];

        for strategy in Strategy::ALL {
            let result = packer(strategy).check_feasibility(&items, &container);
            assert!(!result.success());
            assert_eq!(result.packed_count(), 0);
            assert!(result.placements().is_empty());
            assert_eq!(result.strategy(), strategy);
        }
    }

    #[test]
    fn test_scenario_a_mixed_sizes() {
        let container = cube_container(10.0);
        let result = Packer3D::default_config().check_feasibility(&scenario_a(), &container);

        // touching counts as a collision, so only the origin and the three
        // mid-edge seeds are usable anchors
        assert!(!result.success());
        assert_eq!(result.packed_count(), 4);
        assert_eq!(result.total_count(), 5);
        assert!(result.message().contains("4/5"));
        assert_eq!(result.unplaced(), ["A5".to_string()]);
        assert_valid_layout(&result, &container);

        let pos = |id: &str| result.placement_of(id).unwrap().position;
        assert_eq!(pos("A1"), Point3D::origin());
        assert_eq!(pos("A4"), Point3D::new(5.0, 0.0, 0.0));
        assert_eq!(pos("A2"), Point3D::new(0.0, 5.0, 0.0));
        assert_eq!(pos("A3"), Point3D::new(0.0, 0.0, 5.0));
        assert_eq!(
            result.placement_of("A3").unwrap().dimensions,
            Dimensions::new(1.0, 8.0, 1.0)
        );
    }

    #[test]
    fn test_scenario_b_large_cubes() {
        let container = cube_container(10.0);
        let items = vec![
            item("B1", 8.0, 8.0, 8.0),
            item("B2", 6.0, 6.0, 6.0),
            item("B3", 5.0, 5.0, 5.0),
        ];

        for strategy in Strategy::ALL {
            let result = packer(strategy).check_feasibility(&items, &container);
            assert!(!result.success());
            assert_eq!(result.packed_count(), 1);
            assert!(result.message().contains("1/3"), "{}", result.message());
        }
    }

    #[test]
    fn test_scenario_c_many_small_cubes() {
        let container = cube_container(10.0);
        let items: Vec<Item> = (0..20).map(|i| item(&format!("C{}", i), 2.0, 2.0, 2.0)).collect();

        let result = Packer3D::default_config().check_feasibility(&items, &container);
        assert!(!result.success());
        assert_eq!(result.packed_count(), 4);
        assert_eq!(result.unplaced().len(), 16);
        assert_valid_layout(&result, &container);

        let positions: Vec<Point3D> = result.placements().iter().map(|p| p.position).collect();
        assert_eq!(
            positions,
            vec![
                Point3D::origin(),
                Point3D::new(5.0, 0.0, 0.0),
                Point3D::new(0.0, 5.0, 0.0),
                Point3D::new(0.0, 0.0, 5.0),
            ]
        );
    }

    #[test]
    fn test_rotation_off_keeps_dimensions() {
        let container = Container::new("bin", 20.0, 15.0, 12.0).unwrap();
        let items = random_items(15, 3, 1.0, 6.0).unwrap();
        let config = Config::new().with_rotation(false);

        for strategy in Strategy::ALL {
            let packer = Packer3D::new(config.clone().with_strategy(strategy)).unwrap();
            let result = packer.check_feasibility(&items, &container);
            assert!(result.packed_count() > 0);
            for p in result.placements() {
                let original = items.iter().find(|i| i.id() == &p.item_id).unwrap();
                assert_eq!(&p.dimensions, original.dimensions());
                assert!(!p.is_rotated());
            }
        }
    }

    #[test]
    fn test_layouts_are_valid_for_every_strategy() {
        let container = Container::new("bin", 30.0, 25.0, 20.0).unwrap();
        for seed in 0..5 {
            let items = random_items(40, seed, 1.0, 8.0).unwrap();
            for strategy in Strategy::ALL {
                let result = packer(strategy).check_feasibility(&items, &container);
                assert_valid_layout(&result, &container);
                assert_eq!(result.packed_count() + result.unplaced().len(), items.len());
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let container = Container::new("bin", 25.0, 25.0, 25.0).unwrap();
        let items = random_items(60, 42, 1.0, 6.0).unwrap();

        for strategy in Strategy::ALL {
            let packer = packer(strategy);
            let first = packer.check_feasibility(&items, &container);
            let second = packer.check_feasibility(&items, &container);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_octree_matches_naive() {
        let container = Container::new("bin", 30.0, 30.0, 30.0).unwrap();
        for seed in [1, 7, 42, 99] {
            let items = random_items(80, seed, 1.0, 7.0).unwrap();
            for strategy in Strategy::ALL {
                let config = Config::new().with_strategy(strategy);
                let fast = Packer3D::new(config.clone().with_spatial_index(true)).unwrap();
                let naive = Packer3D::new(config.with_spatial_index(false)).unwrap();

                let a = fast.check_feasibility(&items, &container);
                let b = naive.check_feasibility(&items, &container);
                assert_eq!(a.success(), b.success());
                assert_eq!(a.packed_count(), b.packed_count());
                assert_relative_eq!(a.utilization(), b.utilization());
                assert_eq!(a.placements(), b.placements());
            }
        }
    }

    #[test]
    fn test_small_octree_limits_match_naive() {
        let container = Container::new("bin", 30.0, 30.0, 30.0).unwrap();
        let items = random_items(80, 5, 1.0, 5.0).unwrap();
        let tight = Config::new().with_octree_capacity(1).with_octree_max_depth(8);

        let a = Packer3D::new(tight.clone()).unwrap().check_feasibility(&items, &container);
        let b = Packer3D::new(tight.with_spatial_index(false))
            .unwrap()
            .check_feasibility(&items, &container);
        assert_eq!(a.placements(), b.placements());
    }

    #[test]
    fn test_full_success_reports_utilization() {
        let container = cube_container(10.0);
        let items = vec![item("a", 4.0, 4.0, 4.0), item("b", 4.0, 4.0, 4.0)];
        let result = Packer3D::default_config().check_feasibility(&items, &container);

        assert!(result.success());
        assert_relative_eq!(result.utilization(), 0.128);
        assert!(result.message().contains("12.80%"));
    }
}

mod multi_container {
    use super::*;

    #[test]
    fn test_scenario_a_spills_into_second_container() {
        let template = cube_container(10.0);
        let multi = Packer3D::default_config().pack_multi_container(&scenario_a(), &template);

        assert_eq!(multi.container_count(), 2);
        assert_eq!(multi.containers()[1].id(), "bin_1");
        let result = multi.result();
        assert!(result.success());
        assert_eq!(result.packed_count(), 5);
        assert_eq!(result.placement_of("A5").unwrap().container_index, 1);
        assert_relative_eq!(result.utilization(), 83.0 / 2000.0);
        assert_valid_layout(result, &template);
    }

    #[test]
    fn test_scenario_c_uses_five_containers() {
        let template = cube_container(10.0);
        let items: Vec<Item> = (0..20).map(|i| item(&format!("C{}", i), 2.0, 2.0, 2.0)).collect();
        let multi = Packer3D::default_config().pack_multi_container(&items, &template);

        assert_eq!(multi.container_count(), 5);
        assert!(multi.containers().iter().all(|c| c.len() == 4));
        assert!(multi.result().success());
        assert!(multi.result().message().contains("5 containers"));
    }

    #[test]
    fn test_template_is_not_modified() {
        let template = cube_container(10.0);
        Packer3D::default_config().pack_multi_container(&scenario_a(), &template);
        assert!(template.is_empty());
    }

    #[test]
    fn test_weight_limit_opens_more_containers() {
        let template = cube_container(10.0).with_max_weight(10.0).unwrap();
        let items: Vec<Item> = (0..3)
            .map(|i| item(&format!("W{}", i), 1.0, 1.0, 1.0).with_weight(6.0).unwrap())
            .collect();

        let multi = Packer3D::default_config().pack_multi_container(&items, &template);
        assert_eq!(multi.container_count(), 3);
        assert!(multi.containers().iter().all(|c| c.total_weight() <= 10.0));
    }

    #[test]
    fn test_unplaceable_items_terminate() {
        let template = cube_container(10.0);
        let items = vec![
            item("too_long", 12.0, 1.0, 1.0),
            item("fits", 1.0, 1.0, 1.0),
        ];
        let multi = Packer3D::default_config().pack_multi_container(&items, &template);

        assert_eq!(multi.container_count(), 1);
        assert_eq!(multi.result().unplaced(), ["too_long".to_string()]);
        assert!(!multi.result().success());
    }
}
