#[macro_use]
extern crate bencher;

use pctdraw::canvas::{Color, DrawContext, Surface};
use pctdraw::math::{point, Angle};
use pctdraw::path::arc::arc_path;
use pctdraw::path::shapes::{circle_path, polygon_path};
use pctdraw::path::traits::PathBuilder;
use pctdraw::path::{ArcOptions, ArcStyle, Path};

use bencher::Bencher;

#[cfg(feature = "profiling")]
const N: usize = 100;
#[cfg(not(feature = "profiling"))]
const N: usize = 1;

fn circles_build(bench: &mut Bencher) {
    bench.iter(|| {
        let mut builder = Path::builder();
        for _ in 0..N {
            for i in 0..1_000 {
                builder.add_circle(point(i as f32, 0.0), 10.0);
            }
        }

        let _ = builder.build();
    });
}

fn circles_path(bench: &mut Bencher) {
    bench.iter(|| {
        for _ in 0..N {
            for i in 0..1_000 {
                let _ = circle_path(point(i as f32, 0.0), 10.0);
            }
        }
    });
}

fn arc_small_radius(bench: &mut Bencher) {
    bench.iter(|| {
        for _ in 0..N {
            for _ in 0..1_000 {
                let _ = arc_path(
                    point(0.0, 0.0),
                    20.0,
                    Angle::degrees(0.0),
                    Angle::degrees(300.0),
                    ArcStyle::Pie,
                    &ArcOptions::DEFAULT,
                );
            }
        }
    });
}

fn arc_large_radius(bench: &mut Bencher) {
    bench.iter(|| {
        for _ in 0..N {
            for _ in 0..100 {
                let _ = arc_path(
                    point(0.0, 0.0),
                    2_000.0,
                    Angle::degrees(0.0),
                    Angle::degrees(300.0),
                    ArcStyle::Open,
                    &ArcOptions::DEFAULT,
                );
            }
        }
    });
}

fn polygon_build(bench: &mut Bencher) {
    let xs: Vec<f32> = (0..1_000).map(|i| (i as f32).cos() * 100.0).collect();
    let ys: Vec<f32> = (0..1_000).map(|i| (i as f32).sin() * 100.0).collect();

    bench.iter(|| {
        for _ in 0..N {
            let _ = polygon_path(&xs, &ys, 3);
        }
    });
}

fn context_percentage_shapes(bench: &mut Bencher) {
    bench.iter(|| {
        for _ in 0..N {
            let mut ctx = DrawContext::new(Surface::new(1920.0, 1080.0));
            for i in 0..100 {
                let p = ctx.polar_degrees(50.0, 50.0, 30.0, i as f32 * 3.6);
                ctx.circle(p.x, p.y, 1.0, Color::BLACK);
                ctx.arc_line(50.0, 50.0, 10.0, Angle::zero(), Angle::degrees(i as f32), 0.2, Color::BLACK);
            }

            let _ = ctx.finish();
        }
    });
}

benchmark_group!(shapes,
    circles_build,
    circles_path,
    polygon_build,
);

benchmark_group!(arcs,
    arc_small_radius,
    arc_large_radius,
);

benchmark_group!(context,
    context_percentage_shapes,
);

benchmark_main!(shapes, arcs, context);
