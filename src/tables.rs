use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use rust_decimal::Decimal;
use wattprice::{core::PricePoint, quantity::rate::KilowattHourRate};

pub fn build_price_table(points: &[PricePoint]) -> Table {
    let mean_rate = mean_rate(points);

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Date", "Start", "End", "Rate"]);
    for point in points {
        table.add_row(vec![
            Cell::new(point.valid_from().format("%b %d")).add_attribute(Attribute::Dim),
            Cell::new(point.valid_from().format("%H:%M")),
            Cell::new(point.valid_to().format("%H:%M")).add_attribute(Attribute::Dim),
            Cell::new(point.value()).set_alignment(CellAlignment::Right).fg(
                if point.value() >= mean_rate { Color::Red } else { Color::Green },
            ),
        ]);
    }
    table
}

fn mean_rate(points: &[PricePoint]) -> KilowattHourRate {
    if points.is_empty() {
        return KilowattHourRate::ZERO;
    }
    let total: KilowattHourRate = points.iter().map(PricePoint::value).sum();
    KilowattHourRate(total.0 / Decimal::from(points.len()))
}
