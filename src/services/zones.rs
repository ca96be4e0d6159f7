//! Zone template resolution: proportions to absolute centimetres.
//!
//! Resolution runs in passes:
//! 1. proportions are checked to sum to 100 (warning only)
//! 2. each zone gets `round(available * proportion / 100)`
//! 3. zones behind a door are raised to their minimum height (deficit pass)
//! 4. the total deficit is taken from the other zones, proportionally to how
//!    much each can give without dropping below its floor (redistribution)
//! 5. integer drift is put on the largest non-door zone (reconciliation)
//! 6. shelf and drawer zones get their item counts and sizes
//!
//! The resolved heights always sum to the available height exactly.

use crate::models::{Family, Template, Zone, ZoneArchetype, ZoneKind};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::warn;

/// Allowed deviation of the proportion sum from 100.
pub const PROPORTION_TOLERANCE: f64 = 0.01;

/// Family-specific physical constants used during resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneRules {
    /// Minimum height of a zone behind a door, unless the zone sets its own
    pub door_zone_min_cm: i32,
    /// No zone gives height below this floor during redistribution
    pub zone_floor_cm: i32,
    /// Default smallest shelf gap
    pub shelf_spacing_min: f64,
    /// Default preferred shelf gap
    pub shelf_spacing_optimal: f64,
    /// Default largest shelf gap
    pub shelf_spacing_max: f64,
    /// Default smallest drawer front
    pub drawer_height_min: f64,
    /// Default preferred drawer front
    pub drawer_height_optimal: f64,
    /// Default largest drawer front
    pub drawer_height_max: f64,
    /// Gap between two drawer fronts
    pub drawer_gap_cm: f64,
    /// Space below the lowest drawer
    pub drawer_bottom_margin_cm: f64,
    /// How far the top drawer front overlaps the zone above
    pub drawer_top_overlap_cm: f64,
}

impl ZoneRules {
    /// Rules for a family. Families without templates share the rack rules.
    #[must_use]
    pub const fn for_family(family: Family) -> Self {
        match family {
            Family::Wardrobe => Self {
                door_zone_min_cm: 60,
                zone_floor_cm: 28,
                shelf_spacing_min: 28.0,
                shelf_spacing_optimal: 32.0,
                shelf_spacing_max: 40.0,
                drawer_height_min: 14.0,
                drawer_height_optimal: 18.0,
                drawer_height_max: 28.0,
                drawer_gap_cm: 0.4,
                drawer_bottom_margin_cm: 2.0,
                drawer_top_overlap_cm: 0.3,
            },
            Family::Rack
            | Family::Bookcase
            | Family::Stand
            | Family::TvStand
            | Family::Bedside => Self {
                door_zone_min_cm: 60,
                zone_floor_cm: 28,
                shelf_spacing_min: 28.0,
                shelf_spacing_optimal: 33.0,
                shelf_spacing_max: 40.0,
                drawer_height_min: 12.0,
                drawer_height_optimal: 16.0,
                drawer_height_max: 24.0,
                drawer_gap_cm: 0.3,
                drawer_bottom_margin_cm: 1.5,
                drawer_top_overlap_cm: 0.2,
            },
        }
    }
}

/// Resolved zones of one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneStack {
    /// Zones bottom to top
    pub zones: Vec<Zone>,
    /// Indices of zones behind a door
    pub door_zone_indices: Vec<usize>,
    /// Door-zone shortfall the other zones could not cover (0 when satisfied)
    pub unmet_door_deficit_cm: i64,
}

impl ZoneStack {
    /// Returns true if some door zone ended up below its minimum.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.unmet_door_deficit_cm > 0
    }

    /// Sum of all zone heights.
    #[must_use]
    pub fn total_height(&self) -> i64 {
        self.zones.iter().map(|zone| i64::from(zone.height_cm)).sum()
    }
}

/// Resolves a template against an available column height using the rules
/// of the template's primary family.
#[must_use]
pub fn resolve_zones(template: &Template, available_height: i32) -> ZoneStack {
    resolve_zones_with(
        template,
        available_height,
        &ZoneRules::for_family(template.primary_family()),
    )
}

/// Resolves a template against an available column height.
#[must_use]
pub fn resolve_zones_with(template: &Template, available_height: i32, rules: &ZoneRules) -> ZoneStack {
    let archetypes = &template.zones;

    let proportion_sum = template.proportion_sum();
    if (proportion_sum - 100.0).abs() > PROPORTION_TOLERANCE {
        warn!(
            template = %template.id,
            proportion_sum,
            "zone proportions do not sum to 100, resolving as given"
        );
    }

    if template
        .doors
        .iter()
        .flat_map(|door| &door.zone_indices)
        .any(|&idx| idx >= archetypes.len())
    {
        warn!(template = %template.id, "door references a zone that does not exist");
    }

    let door_zones = template.door_zone_indices();
    let mut heights = initial_heights(archetypes, available_height);

    // Deficit pass
    let raises: Vec<i64> = archetypes
        .iter()
        .enumerate()
        .map(|(idx, archetype)| {
            if !door_zones.contains(&idx) {
                return 0;
            }
            let min = archetype.min_height_cm.unwrap_or(rules.door_zone_min_cm);
            (i64::from(min) - heights[idx]).max(0)
        })
        .collect();
    for (height, raise) in heights.iter_mut().zip(&raises) {
        *height += raise;
    }
    let deficit: i64 = raises.iter().sum();

    // Redistribution pass
    let mut unmet = 0;
    if deficit > 0 {
        let giveable: Vec<i64> = archetypes
            .iter()
            .enumerate()
            .map(|(idx, archetype)| {
                if door_zones.contains(&idx) {
                    return 0;
                }
                let floor = archetype.min_height_cm.unwrap_or(0).max(rules.zone_floor_cm);
                (heights[idx] - i64::from(floor)).max(0)
            })
            .collect();

        let taken = share(deficit, &giveable);
        for (height, take) in heights.iter_mut().zip(&taken) {
            *height -= take;
        }

        unmet = deficit - taken.iter().sum::<i64>();
        if unmet > 0 {
            // Hand the uncovered part back from the door zones that were raised.
            let returned = share(unmet, &raises);
            for (height, give_back) in heights.iter_mut().zip(&returned) {
                *height -= give_back;
            }
            warn!(
                template = %template.id,
                available_height,
                unmet_cm = unmet,
                "door zones are below their minimum height"
            );
        }
    }

    reconcile(&mut heights, &door_zones, available_height);

    let zones = archetypes
        .iter()
        .zip(heights)
        .map(|(archetype, height)| finalize_zone(archetype, saturate(height), rules))
        .collect();

    ZoneStack {
        zones,
        door_zone_indices: door_zones.into_iter().collect(),
        unmet_door_deficit_cm: unmet,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn initial_heights(archetypes: &[ZoneArchetype], available_height: i32) -> Vec<i64> {
    archetypes
        .iter()
        .map(|archetype| {
            (f64::from(available_height) * archetype.height_proportion / 100.0).round() as i64
        })
        .collect()
}

fn saturate(height: i64) -> i32 {
    i32::try_from(height).unwrap_or(if height < 0 { i32::MIN } else { i32::MAX })
}

/// Splits `amount` across `weights` proportionally, using largest remainders
/// so the parts sum to `min(amount, Σweights)` and no part exceeds its weight.
#[allow(clippy::cast_possible_truncation)]
fn share(amount: i64, weights: &[i64]) -> Vec<i64> {
    let total: i128 = weights.iter().map(|&w| i128::from(w.max(0))).sum();
    if amount <= 0 || total == 0 {
        return vec![0; weights.len()];
    }

    let amount = i128::from(amount).min(total);
    let mut parts = Vec::with_capacity(weights.len());
    let mut remainders = Vec::with_capacity(weights.len());

    for (idx, &weight) in weights.iter().enumerate() {
        let exact = amount * i128::from(weight.max(0));
        parts.push(exact / total);
        remainders.push((exact % total, idx));
    }

    let mut left = amount - parts.iter().sum::<i128>();
    remainders.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    for (remainder, idx) in remainders {
        if left == 0 || remainder == 0 {
            break;
        }
        parts[idx] += 1;
        left -= 1;
    }

    // Each part is at most its weight, so it fits back into i64.
    parts.into_iter().map(|part| part as i64).collect()
}

/// Puts the rounding residual on the largest non-door zone, or on the
/// largest zone when every zone is behind a door.
fn reconcile(heights: &mut [i64], door_zones: &BTreeSet<usize>, available_height: i32) {
    let sum: i64 = heights.iter().sum();
    let residual = i64::from(available_height) - sum;
    if residual == 0 {
        return;
    }

    let target = largest_index(heights, |idx| !door_zones.contains(&idx))
        .or_else(|| largest_index(heights, |_| true));

    if let Some(idx) = target {
        heights[idx] += residual;
    }
}

/// Index of the tallest zone accepted by `filter`; ties go to the lowest index.
fn largest_index(heights: &[i64], filter: impl Fn(usize) -> bool) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, &height) in heights.iter().enumerate() {
        if !filter(idx) {
            continue;
        }
        if best.is_none_or(|b| height > heights[b]) {
            best = Some(idx);
        }
    }
    best
}

fn finalize_zone(archetype: &ZoneArchetype, height_cm: i32, rules: &ZoneRules) -> Zone {
    match archetype.kind {
        ZoneKind::Shelves => {
            let (shelf_count, spacing) = shelf_layout(height_cm, archetype, rules);
            Zone {
                shelf_count: Some(shelf_count),
                shelf_spacing_cm: Some(spacing),
                ..Zone::plain(archetype.kind, height_cm)
            }
        }
        ZoneKind::Drawers => {
            let heights = drawer_heights(height_cm, archetype, rules);
            Zone {
                drawer_count: Some(u32::try_from(heights.len()).unwrap_or(u32::MAX)),
                drawer_heights_cm: Some(heights),
                ..Zone::plain(archetype.kind, height_cm)
            }
        }
        ZoneKind::Hanging | ZoneKind::Empty => Zone::plain(archetype.kind, height_cm),
    }
}

const SPACING_EPSILON: f64 = 1e-9;

/// Upper bound on fronts in one drawer zone; the top front takes the rest.
pub const MAX_DRAWER_COUNT: u32 = 512;

/// Chooses interior shelf count and clear spacing for a shelf zone.
///
/// Tries the optimal spacing first, then the maximum (fewer shelves), then
/// the minimum (more shelves). If none lands inside `[min, max]`, any
/// compartment count that does is taken (closest to optimal); failing that,
/// the minimum-spacing result is used as is.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn shelf_layout(height_cm: i32, archetype: &ZoneArchetype, rules: &ZoneRules) -> (u32, f64) {
    let height = f64::from(height_cm);
    if height <= 0.0 {
        return (0, 0.0);
    }

    let min = archetype.shelf_spacing_min.unwrap_or(rules.shelf_spacing_min);
    let max = archetype.shelf_spacing_max.unwrap_or(rules.shelf_spacing_max);
    let optimal = archetype
        .shelf_spacing_optimal
        .unwrap_or(rules.shelf_spacing_optimal);
    let in_bounds =
        |spacing: f64| spacing >= min - SPACING_EPSILON && spacing <= max + SPACING_EPSILON;

    for target in [optimal, max, min] {
        let (compartments, spacing) = compartments_for(height, target);
        if in_bounds(spacing) {
            return (compartments - 1, spacing);
        }
    }

    if min > 0.0 && max >= min {
        let lowest = (height / max).ceil().max(1.0) as u32;
        let highest = ((height / min).floor() as u32).min(lowest.saturating_add(512));
        let best = (lowest..=highest)
            .map(|compartments| (compartments, height / f64::from(compartments)))
            .filter(|&(_, spacing)| in_bounds(spacing))
            .min_by(|a, b| (a.1 - optimal).abs().total_cmp(&(b.1 - optimal).abs()));
        if let Some((compartments, spacing)) = best {
            return (compartments - 1, spacing);
        }
    }

    let (compartments, spacing) = compartments_for(height, min);
    (compartments - 1, spacing)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn compartments_for(height: f64, target_spacing: f64) -> (u32, f64) {
    let compartments = if target_spacing > 0.0 {
        ((height / target_spacing).round().max(1.0) as u32).max(1)
    } else {
        1
    };
    (compartments, height / f64::from(compartments))
}

/// Computes drawer front heights for a drawer zone, bottom first.
///
/// The count is chosen so fronts come out at least `optimal` high; if that
/// lands outside `[min, max]` the count is recomputed as the fewest drawers
/// whose fronts stay within `max`. All fronts but the top one are whole
/// centimetres; the top front absorbs the remainder plus the top overlap, so
///
/// `bottom margin + Σ fronts + gaps == zone height + overlap`.
///
/// At most [`MAX_DRAWER_COUNT`] fronts are produced.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn drawer_heights(height_cm: i32, archetype: &ZoneArchetype, rules: &ZoneRules) -> Vec<f64> {
    let usable = f64::from(height_cm) - rules.drawer_bottom_margin_cm;
    if usable <= 0.0 {
        return Vec::new();
    }

    let min = archetype.drawer_height_min.unwrap_or(rules.drawer_height_min);
    let max = archetype.drawer_height_max.unwrap_or(rules.drawer_height_max);
    let optimal = archetype
        .drawer_height_optimal
        .unwrap_or(rules.drawer_height_optimal);
    let gap = rules.drawer_gap_cm;

    let front = |count: u32| (usable - gap * f64::from(count - 1)) / f64::from(count);

    let mut count = if optimal + gap > 0.0 {
        (((usable + gap) / (optimal + gap)).floor().max(1.0) as u32).max(1)
    } else {
        1
    };

    let first = front(count);
    if (first < min || first > max) && max + gap > 0.0 {
        count = (((usable + gap) / (max + gap)).ceil().max(1.0) as u32).max(1);
    }
    let count = count.min(MAX_DRAWER_COUNT);

    let base = front(count).floor();
    let lower = f64::from(count - 1);
    let top = usable - gap * lower - base * lower + rules.drawer_top_overlap_cm;

    let mut heights = vec![base; (count - 1) as usize];
    heights.push(top);
    heights
}
