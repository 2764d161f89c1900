//! Benchmark: document rendering throughput

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use grappelli::{Dir, HtmlWriter, Scope, WriteResult, WriterOptions};

fn write_table(doc: &mut HtmlWriter<&mut String>, rows: u32) -> WriteResult<()> {
	doc.table()?.children(|doc| {
		doc.tbody()?.children(|doc| {
			for row in 0..rows {
				doc.tr()?.children(|doc| {
					doc.th()?.scope(Scope::Row)?.text("region")?;
					doc.td()?.colspan(2)?.text(&row.to_string())?;
					doc.td()?.class("num total")?.text("0")
				})?;
			}
			Ok(())
		})
	})
}

fn benchmark_attribute_heavy_element(c: &mut Criterion) {
	c.bench_function("span_five_attributes", |b| {
		let mut out = String::with_capacity(256);
		b.iter(|| {
			out.clear();
			let mut doc = HtmlWriter::new(&mut out);
			doc.span()
				.unwrap()
				.id(black_box("s1"))
				.unwrap()
				.class(black_box("badge  badge-wide"))
				.unwrap()
				.dir(black_box(Dir::Ltr))
				.unwrap()
				.title(black_box("Tom & Jerry"))
				.unwrap()
				.tabindex(black_box(0))
				.unwrap()
				.finish()
				.unwrap();
		});
	});
}

fn benchmark_table_compact(c: &mut Criterion) {
	c.bench_function("table_50_rows_compact", |b| {
		let mut out = String::with_capacity(8 * 1024);
		b.iter(|| {
			out.clear();
			let mut doc = HtmlWriter::new(&mut out);
			write_table(&mut doc, black_box(50)).unwrap();
		});
	});
}

fn benchmark_table_pretty(c: &mut Criterion) {
	c.bench_function("table_50_rows_pretty", |b| {
		let mut out = String::with_capacity(16 * 1024);
		b.iter(|| {
			out.clear();
			let mut doc =
				HtmlWriter::with_options(&mut out, WriterOptions::new().pretty(true));
			write_table(&mut doc, black_box(50)).unwrap();
		});
	});
}

criterion_group!(
	benches,
	benchmark_attribute_heavy_element,
	benchmark_table_compact,
	benchmark_table_pretty
);
criterion_main!(benches);
