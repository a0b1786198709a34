//! Route synthesis
//!
//! Builds the candidate route set for a corridor search. Fees, spreads,
//! settlement times and escrow flags are drawn from the supplied random
//! source, so callers that need reproducible output (tests) pass a seeded
//! generator and production passes `rand::thread_rng()`.

use rand::Rng;
use std::cmp::Ordering;

use crate::directory::{Anchor, AnchorDirectory, AnchorKind, AnchorStatus, RateTable};
use crate::models::{FeeBreakdown, RemittanceRoute, base36_suffix};

/// On-ramp fee range, percent of sent amount.
pub const ON_RAMP_FEE_RANGE: (f64, f64) = (0.2, 1.0);
/// Bridge fee range, percent.
pub const BRIDGE_FEE_RANGE: (f64, f64) = (0.05, 0.35);
/// Off-ramp fee range, percent.
pub const OFF_RAMP_FEE_RANGE: (f64, f64) = (0.2, 0.8);
/// Exchange-rate spread factor range applied to the base rate.
pub const RATE_SPREAD_RANGE: (f64, f64) = (0.991, 0.999);
/// Discrete settlement-time options in minutes.
pub const TIME_OPTIONS_MIN: [u32; 6] = [5, 15, 30, 60, 120, 1440];

/// Round to two decimals, the precision every monetary figure in the demo
/// carries at each stage.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render settlement minutes the way route cards display them.
pub fn format_eta(minutes: u32) -> String {
    if minutes < 60 {
        format!("{} min", minutes)
    } else if minutes < 1440 {
        format!("{} hrs", minutes / 60)
    } else {
        "1 day".to_string()
    }
}

/// Generate the candidate route set for a corridor search.
///
/// Returns an empty vec when either country code is unknown. Otherwise one
/// route per (origin anchor x destination anchor) pair, with exactly one
/// recommended route whenever at least one pair is available, ordered
/// recommended-first then ascending by fee percentage.
pub fn generate_routes<R: Rng + ?Sized>(
    directory: &AnchorDirectory,
    rates: &RateTable,
    origin_country: &str,
    destination_country: &str,
    amount: f64,
    rng: &mut R,
) -> Vec<RemittanceRoute> {
    let (Some(origin), Some(dest)) = (
        directory.country(origin_country),
        directory.country(destination_country),
    ) else {
        return Vec::new();
    };

    let base_rate = rates.base_rate(&origin.currency, &dest.currency);

    let mut origin_anchors = directory.origin_candidates(origin);
    let mut dest_anchors = directory.destination_candidates(dest);

    // A corridor side with no directory entry still gets one synthetic
    // operational gateway so every valid search yields routes.
    if origin_anchors.is_empty() {
        origin_anchors.push(Anchor::gateway_for(origin, AnchorKind::OnRamp));
    }
    if dest_anchors.is_empty() {
        dest_anchors.push(Anchor::gateway_for(dest, AnchorKind::OffRamp));
    }

    let mut routes = Vec::with_capacity(origin_anchors.len() * dest_anchors.len());

    for oa in &origin_anchors {
        for da in &dest_anchors {
            routes.push(synthesize_route(oa, da, origin, dest, amount, base_rate, rng));
        }
    }

    // Recommendation pass: cheapest blend of fee and settlement time among
    // the available routes.
    let best = routes
        .iter()
        .enumerate()
        .filter(|(_, r)| r.available)
        .min_by(|(_, a), (_, b)| {
            score(a).partial_cmp(&score(b)).unwrap_or(Ordering::Equal)
        })
        .map(|(idx, _)| idx);
    if let Some(idx) = best {
        routes[idx].recommended = true;
    }

    routes.sort_by(|a, b| match (a.recommended, b.recommended) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a
            .fee_percentage
            .partial_cmp(&b.fee_percentage)
            .unwrap_or(Ordering::Equal),
    });

    tracing::debug!(
        origin = origin_country,
        destination = destination_country,
        count = routes.len(),
        "synthesized routes"
    );

    routes
}

fn score(route: &RemittanceRoute) -> f64 {
    route.fee_percentage + route.estimated_minutes as f64 / 60.0
}

fn synthesize_route<R: Rng + ?Sized>(
    oa: &Anchor,
    da: &Anchor,
    origin: &crate::directory::Country,
    dest: &crate::directory::Country,
    amount: f64,
    base_rate: f64,
    rng: &mut R,
) -> RemittanceRoute {
    let on_ramp_fee = round2(rng.gen_range(ON_RAMP_FEE_RANGE.0..ON_RAMP_FEE_RANGE.1));
    let bridge_fee = round2(rng.gen_range(BRIDGE_FEE_RANGE.0..BRIDGE_FEE_RANGE.1));
    let off_ramp_fee = round2(rng.gen_range(OFF_RAMP_FEE_RANGE.0..OFF_RAMP_FEE_RANGE.1));
    let fee_percentage = round2(on_ramp_fee + bridge_fee + off_ramp_fee);
    let fee_amount = round2(amount * fee_percentage / 100.0);

    let spread = rng.gen_range(RATE_SPREAD_RANGE.0..RATE_SPREAD_RANGE.1);
    let exchange_rate = round2(base_rate * spread);
    let received_amount = round2((amount - fee_amount) * exchange_rate);

    let estimated_minutes = TIME_OPTIONS_MIN[rng.gen_range(0..TIME_OPTIONS_MIN.len())];
    let escrow = rng.gen_bool(0.5);

    let mut risks = Vec::new();
    if da.status == AnchorStatus::Degraded {
        risks.push("Destination anchor experiencing delays".to_string());
    }
    if estimated_minutes >= 1440 {
        risks.push("Settlement may take up to 24 hours".to_string());
    }
    if fee_percentage > 2.0 {
        risks.push("Higher than average fee".to_string());
    }

    RemittanceRoute {
        id: format!("route-{}-{}-{}", oa.id, da.id, base36_suffix(rng, 4)),
        origin_anchor: oa.clone(),
        destination_anchor: da.clone(),
        origin_country: origin.code.clone(),
        origin_currency: origin.currency.clone(),
        destination_country: dest.code.clone(),
        destination_currency: dest.currency.clone(),
        fee_percentage,
        fee_amount,
        fee_breakdown: FeeBreakdown {
            on_ramp: on_ramp_fee,
            bridge: bridge_fee,
            off_ramp: off_ramp_fee,
        },
        estimated_time: format_eta(estimated_minutes),
        estimated_minutes,
        exchange_rate,
        received_amount,
        available: oa.available && da.available,
        escrow,
        risks,
        recommended: false,
    }
}
