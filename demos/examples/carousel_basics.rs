// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel basics.
//!
//! Drive a headless carousel with buttons, dots, a swipe, and autoplay on a
//! simulated clock. Set `RUST_LOG=understory_carousel=trace` to see every
//! drag sample.
//!
//! Run:
//! - `cargo run -p understory_carousel_demos --example carousel_basics`

use kurbo::{Point, Rect};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use understory_carousel::{Carousel, CarouselOptions, Direction, prepare_controls};
use understory_carousel_demos::ConsoleView;

fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "understory_carousel=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let options = CarouselOptions::new("[data-slider]")
        .with_buttons(true)
        .with_dots(true)
        .with_autoplay(Some(1_000));

    let mut view = ConsoleView::new(4, 320.0);
    let plan = prepare_controls(&options, &mut view, 4);
    println!("controls: {plan:?}");

    let mut carousel = match Carousel::new(options, view) {
        Ok(carousel) => carousel,
        Err(err) => {
            eprintln!("cannot mount: {err}");
            return;
        }
    };
    println!("start      {}", carousel.view().strip());

    carousel.advance(Direction::Next);
    println!("next       {}", carousel.view().strip());
    carousel.advance(Direction::Prev);
    carousel.advance(Direction::Prev);
    println!("prev x2    {}", carousel.view().strip());

    if let Err(err) = carousel.select_dot("2") {
        eprintln!("dot rejected: {err}");
    }
    println!("dot 2      {}", carousel.view().strip());

    // A 140px swipe to the left over the visible slide.
    let slide = Rect::new(0.0, 0.0, 320.0, 180.0);
    carousel.touch_start(Point::new(200.0, 90.0), slide);
    for x in [180.0, 130.0, 60.0] {
        carousel.touch_move(Point::new(x, 90.0));
    }
    let outcome = carousel.touch_end();
    println!("swipe      {} ({outcome:?})", carousel.view().strip());

    carousel.start_autoplay(0);
    for now in (0..=3_500).step_by(250) {
        if carousel.tick(now) {
            println!("t={now:>5}  {}", carousel.view().strip());
        }
    }

    carousel.stop();
    let view = carousel.destroy();
    println!("destroyed  {}", view.strip());
}
