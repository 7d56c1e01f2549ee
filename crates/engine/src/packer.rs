//! 3D bin packing driver.

use crate::container::Container;
use crate::item::Item;
use crate::placement::{find_position, CollisionIndex};
use octopack_core::{Config, ItemId, PackingResult, Result, StrategyProfile};

/// Outcome of a multi-container run: the filled containers and the aggregate
/// result.
#[derive(Debug, Clone)]
pub struct MultiPackingResult {
    containers: Vec<Container>,
    result: PackingResult,
}

impl MultiPackingResult {
    /// Returns the containers that received items, in opening order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Returns the aggregate result.
    pub fn result(&self) -> &PackingResult {
        &self.result
    }

    /// Returns the number of containers used.
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    /// Splits into the containers and the aggregate result.
    pub fn into_parts(self) -> (Vec<Container>, PackingResult) {
        (self.containers, self.result)
    }
}

/// 3D bin packing solver.
///
/// Holds only immutable configuration, so one packer can serve any number of
/// runs. Runs never fail: an item that cannot be placed is reported in the
/// result.
#[derive(Debug, Clone)]
pub struct Packer3D {
    config: Config,
    profile: StrategyProfile,
}

impl Packer3D {
    /// Creates a new packer with the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let profile = config.strategy.profile();
        Ok(Self { config, profile })
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        let config = Config::default();
        let profile = config.strategy.profile();
        Self { config, profile }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Checks whether every item fits into a single container.
    ///
    /// The container passed in is used as a template and left untouched.
    /// Packing stops at the first item that cannot be placed; it and every
    /// item after it are reported unplaced.
    pub fn check_feasibility(&self, items: &[Item], container: &Container) -> PackingResult {
        let strategy = self.config.strategy;
        let item_volume: f64 = items.iter().map(Item::volume).sum();

        if item_volume > container.volume() {
            log::debug!(
                "rejecting {} items: volume {:.2} exceeds container volume {:.2}",
                items.len(),
                item_volume,
                container.volume()
            );
            return PackingResult::volume_rejected(
                strategy,
                items.iter().map(|i| i.id().clone()).collect(),
                item_volume,
                container.volume(),
            );
        }

        let ordered = self.order_items(items);
        let mut bin = container.empty_copy(container.id());
        let mut index = CollisionIndex::new(&bin, &self.config);
        let mut unplaced: Vec<ItemId> = Vec::new();

        for (i, item) in ordered.iter().enumerate() {
            if !self.place(item, &mut bin, &mut index) {
                log::debug!(
                    "{}: '{}' does not fit after {} placements, stopping",
                    strategy,
                    item.id(),
                    i
                );
                unplaced.extend(ordered[i..].iter().map(|it| it.id().clone()));
                break;
            }
        }

        let result = PackingResult::single_container(
            strategy,
            bin.placements(0),
            unplaced,
            container.volume(),
            bin.used_volume(),
        );
        log::debug!("{}", result);
        result
    }

    /// Packs items into as many copies of `template` as needed.
    ///
    /// Items are taken largest volume first. Each container is filled with
    /// every remaining item that fits before the next one is opened; opened
    /// containers are named `{template_id}_{n}` counting from zero. Items that
    /// do not fit an empty container are reported unplaced.
    pub fn pack_multi_container(&self, items: &[Item], template: &Container) -> MultiPackingResult {
        let mut remaining: Vec<&Item> = items.iter().collect();
        remaining.sort_by(|a, b| b.volume().total_cmp(&a.volume()));

        let mut containers: Vec<Container> = Vec::new();
        let mut placements = Vec::new();
        let mut unplaced: Vec<ItemId> = Vec::new();

        while !remaining.is_empty() {
            let n = containers.len();
            let mut bin = template.empty_copy(format!("{}_{}", template.id(), n));
            let mut index = CollisionIndex::new(&bin, &self.config);

            let mut leftover: Vec<&Item> = Vec::new();
            for item in remaining {
                if !self.place(item, &mut bin, &mut index) {
                    leftover.push(item);
                }
            }

            if bin.is_empty() {
                for item in &leftover {
                    log::warn!(
                        "item '{}' ({:.2}x{:.2}x{:.2}) does not fit an empty container '{}'",
                        item.id(),
                        item.width(),
                        item.height(),
                        item.depth(),
                        template.id()
                    );
                }
                unplaced.extend(leftover.iter().map(|it| it.id().clone()));
                break;
            }

            log::debug!("{}", bin);
            placements.extend(bin.placements(n));
            containers.push(bin);
            remaining = leftover;
        }

        let total_volume = template.volume() * containers.len() as f64;
        let used_volume: f64 = containers.iter().map(Container::used_volume).sum();
        let result = PackingResult::multi_container(
            self.config.strategy,
            placements,
            unplaced,
            containers.len(),
            total_volume,
            used_volume,
        );
        log::debug!("{}", result);

        MultiPackingResult { containers, result }
    }

    /// Orders items for single-container packing. The sort is stable.
    fn order_items<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        let mut ordered: Vec<&Item> = items.iter().collect();
        ordered.sort_by(|a, b| (self.profile.order)(a.dimensions(), b.dimensions()));
        ordered
    }

    /// Places one item into the container if a feasible position exists.
    fn place(&self, item: &Item, bin: &mut Container, index: &mut CollisionIndex) -> bool {
        if !bin.can_carry(item) {
            log::trace!("'{}' would exceed the weight capacity of '{}'", item.id(), bin.id());
            return false;
        }

        let Some(position) = find_position(item, bin, index, &self.config, self.profile.rule)
        else {
            return false;
        };

        if !bin.add_item(item.clone(), position.point, position.orientation) {
            return false;
        }
        index.record(item.id().clone(), position.aabb());

        log::trace!(
            "placed '{}' in '{}' at ({:.2}, {:.2}, {:.2}) as {:?}",
            item.id(),
            bin.id(),
            position.point.x,
            position.point.y,
            position.point.z,
            position.orientation
        );
        true
    }
}

impl Default for Packer3D {
    fn default() -> Self {
        Self::default_config()
    }
}
