//! # Terminal Game of Life demo
//!
//! Drives a full session against a character-cell drawing surface: each
//! canvas pixel becomes one character, live cells render as `#`, and the
//! status labels print under the frame. Runs a glider and a blinker for
//! a few seconds at a slow rate.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example terminal_life
//! ```

use std::time::{Duration, Instant};

use anyhow::Result;
use seawolf::prelude::*;

const CANVAS_WIDTH: u32 = 64;
const CANVAS_HEIGHT: u32 = 24;

/// Character-grid implementation of the drawing surface.
struct TerminalSurface {
    width: u32,
    height: u32,
    chars: Vec<char>,
    labels: Vec<String>,
}

impl TerminalSurface {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            chars: vec![' '; (width * height) as usize],
            labels: Vec::new(),
        }
    }

    fn plot(&mut self, x: u32, y: u32, glyph: char) {
        if x < self.width && y < self.height {
            self.chars[(y * self.width + x) as usize] = glyph;
        }
    }

    /// Print the current frame and status labels to stdout.
    fn present(&self) {
        let mut frame = String::new();
        for y in 0..self.height {
            for x in 0..self.width {
                frame.push(self.chars[(y * self.width + x) as usize]);
            }
            frame.push('\n');
        }
        for label in &self.labels {
            frame.push_str(label);
            frame.push('\n');
        }
        // Clear screen and home the cursor between frames.
        print!("\x1b[2J\x1b[H{}", frame);
    }
}

impl DrawingSurface for TerminalSurface {
    fn clear(&mut self, _width: u32, _height: u32) {
        self.chars.fill('.');
        self.labels.clear();
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, _color: Rgb) {
        for dy in 0..height {
            for dx in 0..width {
                self.plot(x + dx, y + dy, '#');
            }
        }
    }

    fn draw_line(&mut self, x1: u32, y1: u32, x2: u32, y2: u32, _color: Rgb) {
        if y1 == y2 {
            for x in x1.min(x2)..=x1.max(x2) {
                self.plot(x, y1, '-');
            }
        } else if x1 == x2 {
            for y in y1.min(y2)..=y1.max(y2) {
                self.plot(x1, y, '|');
            }
        }
    }

    fn draw_text(&mut self, text: &str, _x: u32, _y: u32, _color: Rgb) {
        // Label positions assume a large canvas; in a terminal the labels
        // read better under the frame.
        self.labels.push(text.to_string());
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut session = LifeSession::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    let mut surface = TerminalSurface::new(CANVAS_WIDTH, CANVAS_HEIGHT);

    let start = Instant::now();
    session.stamp(4, 4, "glider", &mut surface)?;
    session.stamp(10, 40, "blinker", &mut surface)?;
    session.change_rate(8, start, &mut surface);
    session.start(start);

    while start.elapsed() < Duration::from_secs(10) {
        session.update(Instant::now(), &mut surface);
        surface.present();
        std::thread::sleep(Duration::from_millis(20));
    }

    session.pause();
    println!("stopped after {} generations", session.generation());
    Ok(())
}
