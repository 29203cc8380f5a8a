//! End-to-end filter passes against in-memory and host-style surfaces.

use std::cell::Cell;

use easel_core::{Error, MemorySurface, PixelBuffer, Rect, Surface};
use easel_filters::{ApplyOptions, Filter, FilterError, FilterStage, PixelContext};
use easel_math::{clamp, lerp, Vec4};

/// Surface that refuses reads and records whether anything was written.
#[derive(Default)]
struct LockedSurface {
    writes: Cell<usize>,
}

impl Surface for LockedSurface {
    fn width(&self) -> u32 {
        16
    }

    fn height(&self) -> u32 {
        16
    }

    fn get_image_data(&self, _region: Rect) -> easel_core::Result<PixelBuffer> {
        Err(Error::read_denied("locked for test"))
    }

    fn put_image_data(&mut self, _buffer: &PixelBuffer, _x: u32, _y: u32) {
        self.writes.set(self.writes.get() + 1);
    }
}

fn identity() -> FilterStage<(), impl Fn(&(), &mut PixelContext) + Clone> {
    FilterStage::from_fn((), |_, _| {})
}

fn checkerboard(width: u32, height: u32) -> MemorySurface {
    let mut buf = PixelBuffer::new(width, height);
    for (x, y) in buf.bounds().iter_coords() {
        let on = (x + y) % 2 == 0;
        buf.set_pixel(x, y, if on { [250, 240, 230, 255] } else { [5, 15, 25, 100] });
    }
    MemorySurface::from_buffer(buf)
}

#[test]
fn identity_two_pixel_scenario() {
    let bytes = vec![10, 20, 30, 255, 200, 100, 50, 128];
    let mut surface = MemorySurface::from_buffer(PixelBuffer::from_data(2, 1, bytes.clone()).unwrap());

    assert!(identity().apply(&mut surface, Rect::new(0, 0, 2, 1), ApplyOptions::new()));

    let out = surface.get_image_data(Rect::new(0, 0, 2, 1)).unwrap();
    assert_eq!(out.data(), bytes.as_slice());
}

#[test]
fn identity_copies_every_region() {
    let source = checkerboard(7, 5);
    let stage = identity();

    for region in [
        Rect::new(0, 0, 7, 5),
        Rect::new(1, 1, 3, 2),
        Rect::new(6, 4, 1, 1),
        Rect::new(2, 0, 5, 5),
    ] {
        let mut target = MemorySurface::new(7, 5);
        assert!(stage.apply_to(&source, region, &mut target, ApplyOptions::new()));
        assert_eq!(
            target.get_image_data(region).unwrap(),
            source.get_image_data(region).unwrap(),
            "region {region}"
        );
    }
}

#[test]
fn identity_to_shifted_target() {
    let source = checkerboard(4, 4);
    let mut target = MemorySurface::new(10, 10);
    let region = Rect::new(1, 1, 2, 3);

    let opts = ApplyOptions::new().with_target_origin(6, 0);
    assert!(identity().apply_to(&source, region, &mut target, opts));

    assert_eq!(
        target.get_image_data(Rect::new(6, 0, 2, 3)).unwrap(),
        source.get_image_data(region).unwrap()
    );
    // the default origin was not touched
    assert_eq!(target.get_image_data(region).unwrap(), PixelBuffer::new(2, 3));
}

#[test]
fn target_axes_default_independently() {
    let source = MemorySurface::from_buffer(PixelBuffer::filled(2, 2, [1, 1, 1, 1]));
    let region = Rect::new(1, 1, 1, 1);

    let mut target = MemorySurface::new(4, 4);
    assert!(identity().apply_to(&source, region, &mut target, ApplyOptions::new().with_target_x(3)));
    assert_eq!(target.pixels().pixel(3, 1), [1, 1, 1, 1]);

    let mut target = MemorySurface::new(4, 4);
    assert!(identity().apply_to(&source, region, &mut target, ApplyOptions::new().with_target_y(3)));
    assert_eq!(target.pixels().pixel(1, 3), [1, 1, 1, 1]);
}

#[test]
fn denied_read_returns_false_without_writing() {
    let source = LockedSurface::default();
    let mut target = checkerboard(4, 4);
    let before = target.clone();

    assert!(!identity().apply_to(&source, Rect::new(0, 0, 2, 1), &mut target, ApplyOptions::new()));
    assert_eq!(target, before);

    let mut locked = LockedSurface::default();
    assert!(!identity().apply(&mut locked, Rect::new(0, 0, 2, 1), ApplyOptions::new()));
    assert_eq!(locked.writes.get(), 0);
}

#[test]
fn denied_read_skips_transform() {
    let calls = Cell::new(0);
    let stage = FilterStage::from_fn((), |_, _| calls.set(calls.get() + 1));

    let mut tainted = checkerboard(4, 4);
    tainted.set_tainted(true);
    let before = tainted.clone();

    let err = stage
        .try_apply(&mut tainted, Rect::new(0, 0, 4, 4), ApplyOptions::new())
        .unwrap_err();
    let FilterError::SourceReadDenied { region, source } = err;
    assert_eq!(region, Rect::new(0, 0, 4, 4));
    assert!(source.is_denied());
    assert_eq!(calls.get(), 0);
    assert_eq!(tainted, before);
}

#[test]
fn clone_behaves_like_original() {
    let stage = FilterStage::from_fn(Vec4::new(0.5, 1.0, 2.0, 1.0), |gain, px| {
        px.dst.mul_vec(*gain);
        px.dst = px.dst.clamp(0.0, 255.0);
    });
    let copy = stage.clone();

    let region = Rect::new(0, 0, 5, 3);
    let mut a = checkerboard(5, 3);
    let mut b = checkerboard(5, 3);
    assert_eq!(stage.apply(&mut a, region, ApplyOptions::new()), copy.apply(&mut b, region, ApplyOptions::new()));
    assert_eq!(a, b);

    let mut tainted = checkerboard(5, 3);
    tainted.set_tainted(true);
    assert_eq!(
        stage.apply(&mut tainted.clone(), region, ApplyOptions::new()),
        copy.apply(&mut tainted, region, ApplyOptions::new())
    );
}

#[test]
fn transforms_use_vector_math() {
    // cross-fade toward white by each pixel's column
    let stage = FilterStage::from_fn(4.0_f32, |width, px| {
        let t = clamp(px.position.x / (*width - 1.0), 0.0, 1.0);
        px.dst = px.src.lerp(Vec4::splat(255.0), t);
        px.dst.a = lerp(px.src.a, px.src.a, t);
    });

    let mut surface = MemorySurface::from_buffer(PixelBuffer::filled(4, 1, [0, 0, 0, 255]));
    assert!(stage.apply(&mut surface, Rect::from_size(4, 1), ApplyOptions::new()));
    assert_eq!(surface.pixels().pixel(0, 0), [0, 0, 0, 255]);
    assert_eq!(surface.pixels().pixel(3, 0), [255, 255, 255, 255]);
    assert_eq!(surface.pixels().pixel(1, 0)[0], 85);
}

#[test]
fn boxed_filters_run_uniformly() {
    let filters: Vec<Box<dyn Filter>> = vec![
        Box::new(identity()),
        Box::new(FilterStage::from_fn((), |_, px| {
            px.dst.sub_scalar(5.0);
        })),
    ];

    let mut surface = MemorySurface::from_buffer(PixelBuffer::filled(1, 1, [10, 10, 10, 10]));
    for filter in &filters {
        assert!(filter.apply(&mut surface, Rect::new(0, 0, 1, 1), ApplyOptions::new()));
    }
    assert_eq!(surface.pixels().pixel(0, 0), [5, 5, 5, 5]);
}

#[test]
fn empty_region_is_a_noop() {
    let mut surface = checkerboard(3, 3);
    let before = surface.clone();
    assert!(identity().apply(&mut surface, Rect::new(1, 1, 0, 0), ApplyOptions::new()));
    assert_eq!(surface, before);
}
