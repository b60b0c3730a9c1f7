use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use xs_s2viz::*;

// --- Fixtures for cell benchmarks ---
fn fixed_lat_lng() -> (f64, f64) {
  (37.7749, -122.4194) // San Francisco
}

// All sixteen level-2 cells of face 4, plus duplicates and a parent, for normalization.
fn unnormalized_cells() -> Vec<CellId> {
  let face = CellId::from_face(4).unwrap_or(CELL_NULL);
  let mut cells: Vec<CellId> = face
    .children()
    .unwrap_or_default()
    .into_iter()
    .flat_map(|c| c.children().unwrap_or_default())
    .collect();
  cells.extend_from_slice(&cells.clone()[..4]);
  cells.push(face);
  cells
}

// --- Benchmark Functions ---

fn bench_from_lat_lng(c: &mut Criterion) {
  let (lat, lng) = fixed_lat_lng();
  let mut group = c.benchmark_group("from_lat_lng");

  for level in [0u8, 10, 20, 30].iter() {
    group.bench_with_input(format!("level_{}", level), level, |b, &l| {
      b.iter(|| CellId::from_lat_lng(black_box(lat), black_box(lng), black_box(l)));
    });
  }
  group.finish();
}

fn bench_cell_vertices(c: &mut Criterion) {
  let (lat, lng) = fixed_lat_lng();
  let Ok(id) = CellId::from_lat_lng(lat, lng, 12) else { return };

  c.bench_function("cell_vertices_level_12", |b| {
    b.iter(|| Cell::from_cell_id(black_box(id)).map(|cell| cell.vertices()));
  });
}

fn bench_tokens(c: &mut Criterion) {
  let text = "89c25, 47e66e4, 487604, 1, b, 504";
  let mut group = c.benchmark_group("tokens");

  group.bench_function("cells_from_tokens", |b| {
    b.iter(|| cells_from_tokens(black_box(text)));
  });
  if let Ok(cells) = cells_from_tokens(text) {
    group.bench_function("cells_to_tokens", |b| {
      b.iter(|| cells_to_tokens(black_box(&cells)));
    });
  }
  group.finish();
}

fn bench_normalize_cells(c: &mut Criterion) {
  let cells = unnormalized_cells();

  c.bench_function("normalize_cells", |b| {
    b.iter_batched(|| cells.clone(), |data| normalize_cells(black_box(data)), BatchSize::SmallInput)
  });
}

criterion_group!(cell_benches, bench_from_lat_lng, bench_cell_vertices, bench_tokens, bench_normalize_cells);
criterion_main!(cell_benches);
