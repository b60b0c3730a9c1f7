// demos/render_covering.rs

use xs_s2viz::{
  cells_from_tokens, covering_union, BoundaryRenderer, CellError, CellId, CoveringConfig, LatLngRect, Region,
  RenderConfig, Theme, Vertex,
};

/// Covers a region with the `max_level` cells on a coarse lattice over its bounding box.
fn lattice_coverer(region: &Region, config: &CoveringConfig) -> Vec<CellId> {
  let b = region.bounds();
  let steps = 4;
  let mut cells = Vec::new();
  for i in 0..=steps {
    for j in 0..=steps {
      let lng = b.lng_lo + (b.lng_hi - b.lng_lo) * f64::from(i) / f64::from(steps);
      let lat = b.lat_lo + (b.lat_hi - b.lat_lo) * f64::from(j) / f64::from(steps);
      let point = Vertex::new(lng, lat);
      let inside = match region {
        Region::Rect(rect) => rect.contains(&point),
        Region::Polygon(_) => true,
      };
      if inside {
        if let Ok(id) = CellId::from_lat_lng(point.lat, point.lng, config.max_level) {
          cells.push(id);
        }
      }
    }
  }
  cells.truncate(config.max_cells);
  cells
}

fn main() -> Result<(), CellError> {
  // 1. Tokens from the command line, or a few well-known cells when none are given.
  let args: Vec<String> = std::env::args().skip(1).collect();
  let tokens = if args.is_empty() {
    "89c25, 2, 3, 5".to_string()
  } else {
    args.join(" ")
  };
  let mut cells = cells_from_tokens(&tokens)?;
  eprintln!("Loaded {} cells from tokens", cells.len());

  // 2. A rectangle straddling the antimeridian near Fiji, covered at level 6.
  let fiji = Region::Rect(LatLngRect {
    lat_lo: -20.0,
    lat_hi: -15.0,
    lng_lo: 176.0,
    lng_hi: 179.9,
  });
  let covering = covering_union(&lattice_coverer, &[fiji], &CoveringConfig::default().with_max_level(6))?;
  eprintln!("Covering of the Fiji rectangle: {} cells", covering.len());
  cells.extend(covering);

  // 3. Render every cell and print the styled collection.
  let renderer = BoundaryRenderer::new(RenderConfig::default().with_theme(Theme::Night));
  let output = renderer.render_cells(&cells);
  eprintln!(
    "Rendered {} cells, skipped {}",
    output.stats.cells_rendered, output.stats.cells_skipped
  );
  for feature in &output.features {
    eprintln!(
      "  {} (level {}): {} ring points, center ({:.4}, {:.4})",
      feature.token,
      feature.level,
      feature.ring.len(),
      feature.center.lat,
      feature.center.lng
    );
  }
  println!("{}", output.to_feature_collection());
  Ok(())
}
