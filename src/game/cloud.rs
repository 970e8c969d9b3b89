use rand::Rng;

/// Pixels a cloud drifts per tick, on both axes
pub const CLOUD_VELOCITY: (i32, i32) = (1, 1);

/// One of the four playfield edges a cloud can enter from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    fn random<R: Rng>(rng: &mut R) -> Self {
        match rng.gen_range(0..4) {
            0 => Edge::Left,
            1 => Edge::Right,
            2 => Edge::Top,
            _ => Edge::Bottom,
        }
    }
}

/// A decorative cloud drifting diagonally across the playfield.
/// Not grid-aligned; never collides with anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cloud {
    pub x: i32,
    pub y: i32,
    pub size: i32,
}

impl Cloud {
    /// Spawn a cloud just outside a uniformly chosen edge
    pub fn spawn<R: Rng>(rng: &mut R, size: i32, width: i32, height: i32) -> Self {
        let mut cloud = Self { x: 0, y: 0, size };
        cloud.place_at_edge(Edge::random(rng), rng, width, height);
        cloud
    }

    /// Reposition just outside a uniformly chosen edge
    pub fn respawn<R: Rng>(&mut self, rng: &mut R, width: i32, height: i32) {
        self.place_at_edge(Edge::random(rng), rng, width, height);
    }

    /// Place the cloud just outside the given edge, at a uniform position
    /// along it
    pub fn place_at_edge<R: Rng>(&mut self, edge: Edge, rng: &mut R, width: i32, height: i32) {
        match edge {
            Edge::Left => {
                self.x = -self.size;
                self.y = rng.gen_range(0..=(height - self.size).max(0));
            }
            Edge::Right => {
                self.x = width;
                self.y = rng.gen_range(0..=(height - self.size).max(0));
            }
            Edge::Top => {
                self.x = rng.gen_range(0..=(width - self.size).max(0));
                self.y = -self.size;
            }
            Edge::Bottom => {
                self.x = rng.gen_range(0..=(width - self.size).max(0));
                self.y = height;
            }
        }
    }

    /// Advance one tick. Wraps back to -size past the far edge only; the min
    /// edges never wrap, so the drift pattern has a directional bias.
    pub fn drift(&mut self, width: i32, height: i32) {
        self.x += CLOUD_VELOCITY.0;
        self.y += CLOUD_VELOCITY.1;

        if self.x > width {
            self.x = -self.size;
        }
        if self.y > height {
            self.y = -self.size;
        }
    }

    /// True once the cloud has reached the far edge on either axis; the game
    /// loop recycles it to a fresh random edge
    pub fn past_far_edge(&self, width: i32, height: i32) -> bool {
        self.x >= width || self.y >= height
    }

    /// True if the cloud rectangle overlaps the grid cell whose top-left
    /// pixel is (cell_x, cell_y)
    pub fn covers_cell(&self, cell_x: i32, cell_y: i32, block_size: i32) -> bool {
        self.x < cell_x + block_size
            && self.x + self.size > cell_x
            && self.y < cell_y + block_size
            && self.y + self.size > cell_y
    }
}
