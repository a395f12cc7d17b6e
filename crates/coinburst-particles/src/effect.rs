//! The coin burst as a schedulable effect: field + drawables + textures

use crate::field::{FieldSummary, ParticleField};
use crate::rand::{ParticleRng, RandomSource};
use crate::sprite::{frame_texture_name, Drawable, Sprite, TextureCache};
use coinburst_core::{CoinburstError, Result, Vec2};
use coinburst_runtime::{Effect, EffectTime};

/// Binds a particle field to one drawable per particle and pushes the
/// simulation into them every dispatched frame.
pub struct CoinEffect<D: Drawable = Sprite, R: RandomSource = ParticleRng> {
    name: String,
    start: f64,
    field: ParticleField<R>,
    drawables: Vec<D>,
    textures: TextureCache,
    /// Viewport size; its height is the respawn boundary
    viewport: Vec2,
}

impl<R: RandomSource> CoinEffect<Sprite, R> {
    /// Create one in-memory sprite per particle, showing the first frame
    pub fn new(field: ParticleField<R>, mut textures: TextureCache, viewport: Vec2) -> Self {
        let first = frame_texture_name(&field.config().asset_prefix, 0);
        let texture = textures.lookup(&first);
        let drawables = (0..field.len()).map(|_| Sprite::new(texture)).collect();
        let mut effect = Self {
            name: "coins".to_string(),
            start: 0.0,
            field,
            drawables,
            textures,
            viewport,
        };
        effect.bind_all();
        effect
    }
}

impl<D: Drawable, R: RandomSource> CoinEffect<D, R> {
    /// Use host-provided drawables, one per particle
    pub fn with_drawables(
        field: ParticleField<R>,
        drawables: Vec<D>,
        textures: TextureCache,
        viewport: Vec2,
    ) -> Result<Self> {
        if drawables.len() != field.len() {
            return Err(CoinburstError::InvalidConfig(format!(
                "expected {} drawables, got {}",
                field.len(),
                drawables.len()
            )));
        }
        let mut effect = Self {
            name: "coins".to_string(),
            start: 0.0,
            field,
            drawables,
            textures,
            viewport,
        };
        effect.bind_all();
        Ok(effect)
    }

    /// Place the effect window at `start` milliseconds into the timeline
    pub fn with_start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    fn bind_all(&mut self) {
        for (particle, drawable) in self.field.particles().iter().zip(&mut self.drawables) {
            particle.bind(drawable);
        }
        log::info!(
            "effect '{}' bound {} coin(s)",
            self.name,
            self.drawables.len()
        );
    }

    /// Advance the simulation to `global_ms` and write it into the drawables
    pub fn step(&mut self, global_ms: f64) {
        let frame = self.field.tick(global_ms, self.viewport.y);
        let name = frame_texture_name(&self.field.config().asset_prefix, frame);
        let texture = self.textures.lookup(&name);

        for (particle, drawable) in self.field.particles().iter().zip(&mut self.drawables) {
            if let Some(texture) = texture {
                drawable.set_texture(texture);
            }
            particle.apply(drawable);
        }
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField<R> {
        &mut self.field
    }

    pub fn drawables(&self) -> &[D] {
        &self.drawables
    }

    pub fn textures(&self) -> &TextureCache {
        &self.textures
    }

    pub fn textures_mut(&mut self) -> &mut TextureCache {
        &mut self.textures
    }

    pub fn summary(&self) -> FieldSummary {
        self.field.summary(self.viewport)
    }
}

impl<D: Drawable, R: RandomSource> Effect for CoinEffect<D, R> {
    fn start(&self) -> f64 {
        self.start
    }

    fn duration(&self) -> f64 {
        self.field.config().duration_ms
    }

    fn tick(&mut self, time: EffectTime) -> Result<()> {
        self.step(time.global);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
