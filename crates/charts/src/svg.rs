use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters::style::text_anchor::HPos;
use plotters::style::text_anchor::Pos;
use plotters::style::text_anchor::VPos;
use std::path::Path;
use ttev_analysis::Chart;

const SIZE: (u32, u32) = (1200, 720);
const FONT: &str = "sans-serif";
const BAR: RGBColor = RGBColor(76, 120, 168);
const LINE: RGBColor = RGBColor(228, 87, 86);

/// Render a chart as an SVG document.
pub fn svg(chart: &Chart) -> anyhow::Result<String> {
    if chart.is_empty() {
        anyhow::bail!("nothing to plot");
    }
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, SIZE).into_drawing_area();
        draw(root, chart).map_err(|e| anyhow::anyhow!("plotting error: {}", e))?;
    }
    log::debug!("rendered {} bars into {} bytes of svg", chart.len(), buffer.len());
    Ok(buffer)
}

/// Render a chart and write it to `path`.
pub fn write(chart: &Chart, path: &Path) -> anyhow::Result<()> {
    let document = svg(chart)?;
    std::fs::write(path, document).map_err(|e| anyhow::anyhow!("write {}: {}", path.display(), e))?;
    log::info!("chart written to {}", path.display());
    Ok(())
}

fn draw<DB>(root: DrawingArea<DB, Shift>, chart: &Chart) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE)?;
    let n = chart.len();
    let labels = chart.labels();
    let above = TextStyle::from((FONT, 13).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    let mut plot = ChartBuilder::on(&root)
        .caption(&chart.caption, (FONT, 22))
        .margin(20)
        .x_label_area_size(180)
        .y_label_area_size(70)
        .right_y_label_area_size(70)
        .build_cartesian_2d((0..n).into_segmented(), chart.ev_range())?
        .set_secondary_coord((0..n).into_segmented(), chart.usage_range());
    plot.configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .x_label_style((FONT, 13).into_font().transform(FontTransform::Rotate90))
        .y_desc("Expected Value (EV)")
        .y_label_formatter(&|y| format!("{:.2}", y))
        .draw()?;
    plot.configure_secondary_axes()
        .y_desc("Usage Rate")
        .y_label_formatter(&|y| format!("{:.0}%", y * 100.0))
        .draw()?;

    // bars
    plot.draw_series(chart.bars.iter().enumerate().map(|(i, bar)| {
        let mut rect = Rectangle::new(
            [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), bar.ev)],
            BAR.filled(),
        );
        rect.set_margin(0, 0, 10, 10);
        rect
    }))?;
    plot.draw_series(chart.bars.iter().enumerate().map(|(i, bar)| {
        Text::new(bar.ev_text(), (SegmentValue::CenterOf(i), bar.ev_anchor()), above.clone())
    }))?;

    // usage line
    let offset = chart.usage_offset();
    let points = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| (SegmentValue::CenterOf(i), bar.usage))
        .collect::<Vec<_>>();
    plot.draw_secondary_series(LineSeries::new(points.clone(), LINE.stroke_width(2)))?;
    plot.draw_secondary_series(points.iter().cloned().map(|p| Circle::new(p, 5, LINE.filled())))?;
    plot.draw_secondary_series(chart.bars.iter().enumerate().map(|(i, bar)| {
        Text::new(
            bar.usage_text(),
            (SegmentValue::CenterOf(i), bar.usage + offset),
            above.clone().color(&LINE),
        )
    }))?;
    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttev_analysis::Entry;
    use ttev_labels::Action;
    use ttev_labels::Spin;
    use ttev_tables::Strategy;

    fn chart() -> Chart {
        let rows = [
            (Action::Counter, Spin::Top, 0.701, 0.20),
            (Action::Block, Spin::Back, 0.612, 0.25),
            (Action::Drive, Spin::Top, 0.540, 0.45),
        ];
        let entries = rows
            .iter()
            .map(|(reply, spin, ev, usage)| {
                let strategy = Strategy {
                    first: Action::Drive,
                    first_spin: Some(Spin::Top),
                    reply: *reply,
                    reply_spin: Some(*spin),
                    ev: *ev,
                    usage: *usage,
                    count: 10,
                };
                Entry::new(&strategy, true)
            })
            .collect::<Vec<Entry>>();
        Chart::new(String::from("終局策略"), &entries)
    }

    #[test]
    fn annotates_every_bar_and_point() {
        let document = svg(&chart()).unwrap();
        assert!(document.contains("<svg"));
        for text in ["0.701", "0.612", "0.540", "20.0%", "25.0%", "45.0%"] {
            assert!(document.contains(text), "missing {}", text);
        }
    }

    #[test]
    fn draws_both_axis_titles() {
        let document = svg(&chart()).unwrap();
        assert!(document.contains("Expected Value (EV)"));
        assert!(document.contains("Usage Rate"));
        assert!(document.contains("終局策略"));
    }

    #[test]
    fn empty_chart_is_an_error() {
        let chart = Chart::new(String::from("empty"), &[]);
        assert!(svg(&chart).is_err());
    }
}
