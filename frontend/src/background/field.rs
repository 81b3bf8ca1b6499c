use crate::config::{FieldConfig, Rgb};

/// Source of uniform values in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Browser randomness through `Math.random()`.
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub color: Rgb,
    pub alpha: f64,
}

impl Node {
    fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        self.x = wrap(self.x, self.radius, width);
        self.y = wrap(self.y, self.radius, height);
    }
}

// Once a node is fully past an edge it reappears just outside the opposite one.
fn wrap(pos: f64, radius: f64, extent: f64) -> f64 {
    if pos < -radius {
        extent + radius
    } else if pos > extent + radius {
        -radius
    } else {
        pos
    }
}

/// The drifting light sources behind the landing page.
///
/// Holds no DOM state; `ParticleAnimator` feeds it viewport sizes and ticks
/// and paints whatever `nodes()` returns.
pub struct ParticleField {
    config: FieldConfig,
    width: f64,
    height: f64,
    nodes: Vec<Node>,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            nodes: Vec::new(),
        }
    }

    /// Replaces every node with a freshly randomized one sized for `width` x `height`.
    pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl RandomSource) {
        self.width = width;
        self.height = height;

        let span = width.max(height);
        let cfg = &self.config;
        self.nodes = (0..cfg.node_count)
            .map(|i| Node {
                x: rng.next_unit() * width,
                y: rng.next_unit() * height,
                vx: (rng.next_unit() - 0.5) * cfg.velocity_span,
                vy: (rng.next_unit() - 0.5) * cfg.velocity_span,
                radius: span * (cfg.radius_base + rng.next_unit() * cfg.radius_span),
                color: cfg.palette[i % cfg.palette.len()],
                alpha: cfg.alpha_base + rng.next_unit() * cfg.alpha_span,
            })
            .collect();
    }

    /// Moves every node one frame forward.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for node in &mut self.nodes {
            node.advance(w, h);
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Deterministic xorshift source for tests.
    pub(crate) struct SeqRandom(u64);

    impl SeqRandom {
        pub(crate) fn new(seed: u64) -> Self {
            Self(seed.max(1))
        }
    }

    impl RandomSource for SeqRandom {
        fn next_unit(&mut self) -> f64 {
            self.0 ^= self.0 << 13;
            self.0 ^= self.0 >> 7;
            self.0 ^= self.0 << 17;
            (self.0 >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    fn field(w: f64, h: f64, seed: u64) -> ParticleField {
        let mut f = ParticleField::new(FieldConfig::default());
        f.resize(w, h, &mut SeqRandom::new(seed));
        f
    }

    #[test]
    fn radii_for_1000_by_800() {
        let f = field(1000.0, 800.0, 7);
        assert_eq!(f.nodes().len(), 6);
        for n in f.nodes() {
            assert!(n.radius >= 350.0 && n.radius < 700.0, "radius {}", n.radius);
        }
    }

    #[test]
    fn colors_cycle_by_index() {
        let cfg = FieldConfig::default();
        let f = field(640.0, 480.0, 3);
        for (i, n) in f.nodes().iter().enumerate() {
            assert_eq!(n.color, cfg.palette[i % cfg.palette.len()]);
        }
    }

    #[test]
    fn velocity_and_alpha_ranges() {
        let f = field(1920.0, 1080.0, 99);
        for n in f.nodes() {
            assert!(n.vx.abs() <= 0.25 && n.vy.abs() <= 0.25);
            assert!(n.alpha >= 0.12 && n.alpha <= 0.24);
        }
    }

    #[test]
    fn resize_replaces_nodes() {
        let mut f = field(800.0, 600.0, 11);
        let before = f.nodes().to_vec();
        f.resize(800.0, 600.0, &mut SeqRandom::new(12));
        assert_eq!(f.nodes().len(), before.len());
        assert_ne!(f.nodes(), &before[..]);
        assert_eq!(f.size(), (800.0, 600.0));
    }

    #[test]
    fn node_past_right_edge_wraps_to_left() {
        let mut f = ParticleField::new(FieldConfig::default());
        // rand = 0.99 puts x near the right edge with vx ~ +0.245
        f.resize(100.0, 100.0, &mut Fixed(0.99));
        let r = f.nodes()[0].radius;
        f.nodes[0].x = 100.0 + r;
        f.step();
        assert_eq!(f.nodes()[0].x, -r);
    }

    #[test]
    fn node_past_top_edge_wraps_to_bottom() {
        let mut f = ParticleField::new(FieldConfig::default());
        f.resize(200.0, 100.0, &mut Fixed(0.0));
        let r = f.nodes()[0].radius;
        f.nodes[0].y = -r;
        f.step();
        assert_eq!(f.nodes()[0].y, 100.0 + r);
    }

    #[test]
    fn step_before_resize_is_noop() {
        let mut f = ParticleField::new(FieldConfig::default());
        f.step();
        assert!(f.nodes().is_empty());
    }

    proptest! {
        #[test]
        fn count_and_radius_hold_for_any_viewport(
            w in 1.0f64..4000.0,
            h in 1.0f64..4000.0,
            seed in any::<u64>(),
        ) {
            let f = field(w, h, seed);
            let span = w.max(h);
            prop_assert_eq!(f.nodes().len(), 6);
            for n in f.nodes() {
                prop_assert!(n.radius >= span * 0.35 && n.radius <= span * 0.70);
            }
        }

        #[test]
        fn positions_stay_bounded(
            w in 1.0f64..2000.0,
            h in 1.0f64..2000.0,
            seed in any::<u64>(),
            frames in 1usize..3000,
        ) {
            let mut f = field(w, h, seed);
            for _ in 0..frames {
                f.step();
            }
            for n in f.nodes() {
                prop_assert!(n.x >= -n.radius && n.x <= w + n.radius);
                prop_assert!(n.y >= -n.radius && n.y <= h + n.radius);
            }
        }

        #[test]
        fn repeated_init_is_structurally_equal(
            w in 1.0f64..3000.0,
            h in 1.0f64..3000.0,
            seed in any::<u64>(),
        ) {
            let mut f = field(w, h, seed);
            let first = f.nodes().len();
            f.resize(w, h, &mut SeqRandom::new(seed.wrapping_add(1)));
            prop_assert_eq!(first, f.nodes().len());
            let span = w.max(h);
            for n in f.nodes() {
                prop_assert!(n.radius >= span * 0.35 && n.radius <= span * 0.70);
            }
        }
    }
}
