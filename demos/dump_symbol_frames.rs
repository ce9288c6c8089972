use ringmeter::{PathCommand, ProgressText, Rect, RingGraphConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = RingGraphConfig::from_json(include_str!("data/graph.json"))?;
    let graph = cfg.build(".")?;
    let rect = Rect::new(0.0, 0.0, 24.0, 24.0);

    for meter in &graph {
        let text = ProgressText::new(Rect::new(0.0, 0.0, 80.0, 40.0), meter);
        println!(
            "{} ({} of {}, ring {:.0}%)",
            meter.title(),
            text.counter_text(),
            meter.max_value(),
            meter.normalized_value() * 100.0
        );
        for p in [0.0, 0.35, 0.45, 0.55, 0.65, 1.0] {
            let path = meter.symbol_path(rect, p);
            let label = text.frame_at(p);
            let moves = path
                .commands()
                .iter()
                .filter(|c| matches!(c, PathCommand::MoveTo(_)))
                .count();
            println!(
                "  p={p:.2} commands={:2} strokes={moves} opacity={:.2} counter_y={:.1}",
                path.len(),
                label.opacity,
                label.counter_rect.y0
            );
        }
    }

    Ok(())
}
