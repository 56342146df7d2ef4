//! Low-resolution pixel canvas the world is painted onto.
//!
//! One canvas pixel covers `PIXEL_SIZE`×`PIXEL_SIZE` world pixels. Shapes are
//! snapped to that grid: rectangles cover every pixel they touch, lines are
//! one pixel wide, triangles cover pixels whose centre lies inside them.

use crate::types::{Color, Point, Rect};

pub const PIXEL_SIZE: i32 = 10;

pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// A canvas for a world of `world_width`×`world_height` pixels.
    pub fn for_world(world_width: i32, world_height: i32, background: Color) -> Self {
        let width = (world_width.max(0) / PIXEL_SIZE) as usize;
        let height = (world_height.max(0) / PIXEL_SIZE) as usize;
        Canvas {
            width,
            height,
            pixels: vec![background; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    fn put(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = color;
        }
    }

    pub fn fill_rect(&mut self, rect: &Rect, color: Color) {
        if rect.width <= 0 || rect.height <= 0 {
            return;
        }
        let x0 = rect.x.div_euclid(PIXEL_SIZE).max(0);
        let y0 = rect.y.div_euclid(PIXEL_SIZE).max(0);
        let x1 = ceil_div(rect.right()).min(self.width as i32);
        let y1 = ceil_div(rect.bottom()).min(self.height as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                self.put(x, y, color);
            }
        }
    }

    /// Outline drawn inside `rect`.
    pub fn stroke_rect(&mut self, rect: &Rect, color: Color, thickness: i32) {
        let t = thickness.min(rect.width).min(rect.height);
        let edges = [
            Rect::new(rect.x, rect.y, rect.width, t),
            Rect::new(rect.x, rect.bottom() - t, rect.width, t),
            Rect::new(rect.x, rect.y, t, rect.height),
            Rect::new(rect.right() - t, rect.y, t, rect.height),
        ];
        for edge in &edges {
            self.fill_rect(edge, color);
        }
    }

    /// Bresenham between the pixels containing `from` and `to`.
    pub fn line(&mut self, from: Point, to: Point, color: Color) {
        let (mut x, mut y) = (from.x.div_euclid(PIXEL_SIZE), from.y.div_euclid(PIXEL_SIZE));
        let (x1, y1) = (to.x.div_euclid(PIXEL_SIZE), to.y.div_euclid(PIXEL_SIZE));
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Blend `color` over every pixel whose centre lies inside the triangle.
    pub fn triangle(&mut self, points: &[Point; 3], color: Color, alpha: u8) {
        let [a, b, c] = *points;
        let area = edge(a, b, c);
        if area == 0 {
            return;
        }
        let min_x = a.x.min(b.x).min(c.x).div_euclid(PIXEL_SIZE).max(0);
        let min_y = a.y.min(b.y).min(c.y).div_euclid(PIXEL_SIZE).max(0);
        let max_x = a.x.max(b.x).max(c.x).div_euclid(PIXEL_SIZE).min(self.width as i32 - 1);
        let max_y = a.y.max(b.y).max(c.y).div_euclid(PIXEL_SIZE).min(self.height as i32 - 1);
        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let p = Point::new(px * PIXEL_SIZE + PIXEL_SIZE / 2, py * PIXEL_SIZE + PIXEL_SIZE / 2);
                let (w0, w1, w2) = (edge(b, c, p), edge(c, a, p), edge(a, b, p));
                let inside = if area > 0 {
                    w0 >= 0 && w1 >= 0 && w2 >= 0
                } else {
                    w0 <= 0 && w1 <= 0 && w2 <= 0
                };
                if inside {
                    let i = py as usize * self.width + px as usize;
                    self.pixels[i] = self.pixels[i].blend(color, alpha);
                }
            }
        }
    }
}

fn ceil_div(v: i32) -> i32 {
    (v + PIXEL_SIZE - 1).div_euclid(PIXEL_SIZE)
}

fn edge(a: Point, b: Point, p: Point) -> i64 {
    (b.x - a.x) as i64 * (p.y - a.y) as i64 - (b.y - a.y) as i64 * (p.x - a.x) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = Color::rgb(0, 0, 0);
    const RED: Color = Color::rgb(255, 0, 0);

    fn lit(canvas: &Canvas) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                if canvas.get(x, y) != Some(BLACK) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn tiny_rect_still_covers_a_pixel() {
        let mut canvas = Canvas::for_world(100, 100, BLACK);
        canvas.fill_rect(&Rect::new(64, 0, 2, 2), RED);
        assert_eq!(lit(&canvas), vec![(6, 0)]);
    }

    #[test]
    fn rect_covers_every_touched_pixel() {
        let mut canvas = Canvas::for_world(100, 100, BLACK);
        canvas.fill_rect(&Rect::new(15, 5, 20, 10), RED);
        assert_eq!(lit(&canvas), vec![(1, 0), (2, 0), (3, 0), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn rect_is_clipped_to_canvas() {
        let mut canvas = Canvas::for_world(30, 30, BLACK);
        canvas.fill_rect(&Rect::new(-50, -50, 1000, 1000), RED);
        assert_eq!(lit(&canvas).len(), 9);
    }

    #[test]
    fn line_connects_endpoints() {
        let mut canvas = Canvas::for_world(100, 100, BLACK);
        canvas.line(Point::new(0, 0), Point::new(35, 35), RED);
        assert_eq!(lit(&canvas), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn stroke_leaves_inside_untouched() {
        let mut canvas = Canvas::for_world(50, 50, BLACK);
        canvas.stroke_rect(&Rect::new(0, 0, 50, 50), RED, 2);
        assert_eq!(canvas.get(2, 2), Some(BLACK));
        assert_eq!(canvas.get(0, 2), Some(RED));
        assert_eq!(canvas.get(4, 4), Some(RED));
    }

    #[test]
    fn triangle_blends_inside_only() {
        let mut canvas = Canvas::for_world(100, 100, BLACK);
        let white = Color::rgb(255, 255, 255);
        canvas.triangle(&[Point::new(0, 0), Point::new(100, 0), Point::new(50, 100)], white, 30);
        assert_eq!(canvas.get(5, 0), Some(Color::rgb(30, 30, 30)));
        assert_eq!(canvas.get(0, 9), Some(BLACK));
        assert_eq!(canvas.get(5, 8), Some(Color::rgb(30, 30, 30)));
    }
}
