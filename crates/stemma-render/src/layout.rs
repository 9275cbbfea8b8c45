use crate::config::ChartConfig;
use crate::model::{Bounds, ChartLayout, EdgeLayout, LayoutPoint, PersonNodeLayout};
use crate::Result;
use chrono::Datelike;
use stemma_core::{ChartData, Error as CoreError, Person, RelationIndex, XResolver, YearScale};

/// Lays out a chart: one marker + label per person, one curved edge per
/// parental relation, edges emitted before nodes.
pub fn layout_chart(data: &ChartData, config: &ChartConfig) -> Result<ChartLayout> {
    let index = RelationIndex::build(&data.relations);
    let (y_low, y_high) = config.y_pixel_range();
    let scale = YearScale::build(&data.persons, y_low, y_high)?;
    tracing::debug!(
        min_year = scale.min_year(),
        max_year = scale.max_year(),
        persons = data.persons.len(),
        "chart year domain"
    );

    let x_scale = config.x_scale();
    let mut resolver = XResolver::new(&index, &data.specs, config.fallback_center());
    let mut place = |person: &Person| -> Result<LayoutPoint> {
        let x = resolver.resolve(person.id)? * x_scale + config.x_axis_offset;
        let y = scale.map(person.birth.year());
        Ok(LayoutPoint { x, y })
    };

    let mut edges = Vec::new();
    for r in data.relations.iter().filter(|r| r.kind.is_parental()) {
        let source = data
            .person(r.source)
            .ok_or(CoreError::UnknownPerson { person_id: r.source })?;
        let target = data
            .person(r.target)
            .ok_or(CoreError::UnknownPerson { person_id: r.target })?;

        let start = place(source)?;
        let end = place(target)?;
        let control = LayoutPoint {
            x: start.x + (end.x - start.x) / 1.5,
            y: start.y + (end.y - start.y) / 8.0,
        };
        let stroke = source
            .dynasty
            .as_deref()
            .and_then(|d| data.dynasties.get(d))
            .map(|style| style.color.clone())
            .unwrap_or_else(|| config.edge_default_color.clone());

        edges.push(EdgeLayout {
            source: r.source,
            target: r.target,
            start,
            control,
            end,
            stroke,
            stroke_width: config.edge_stroke_width,
        });
    }

    let mut nodes = Vec::new();
    for person in &data.persons {
        let at = place(person)?;
        nodes.push(PersonNodeLayout {
            id: person.id,
            label: format!("{} {}", person.id, person.name),
            x: at.x,
            y: at.y,
            radius: config.dot_radius,
            fill: config.dot_color.clone(),
            label_dy: config.label_dy,
            text_color: config.text_color.clone(),
            font_family: config.font_family.clone(),
            font_size: config.font_size,
        });
    }

    let bounds = Bounds::from_points(
        edges
            .iter()
            .flat_map(|e| [(e.start.x, e.start.y), (e.end.x, e.end.y)])
            .chain(nodes.iter().map(|n| (n.x, n.y))),
    );

    Ok(ChartLayout {
        width: config.total_width,
        height: config.total_height,
        bounds,
        edges,
        nodes,
    })
}
