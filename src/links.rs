//! Links between every pair of particles, and the nearest-neighbor policy
//! that decides which of them are visible.
//!
//! The graph is complete: one [`Link`] per unordered particle pair, created
//! once and never destroyed. Each tick:
//!
//! 1. [`LinkGraph::close_set`] ranks every particle's links by wrapped
//!    distance and marks the nearest `k` as close.
//! 2. [`LinkGraph::update_weights`] moves close links toward weight 1 and all
//!    others toward 0, by at most `decay * dt`.
//! 3. [`LinkGraph::render_geometry`] emits segments for links with positive
//!    weight, splitting those that cross an edge.
//!
//! Links are stored in a flat arena. Particles refer to their links through
//! an incidence index built once at construction, not through pointers.

use crate::particle::ParticleSet;
use crate::torus::{split_wrapped_segment, wrapped_distance, Segment, Surface};
use serde::{Deserialize, Serialize};

/// Index of a link in the graph's arena.
///
/// Pairs `(a, b)` with `a < b` are numbered in row-major order, see
/// [`LinkGraph::pair_index`].
pub type LinkId = usize;

/// Connection between two distinct particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    /// Lower particle index. Its side of the ranking is the canonical one.
    pub a: usize,
    /// Higher particle index.
    pub b: usize,
    /// Visibility in `[0, 1]`. Starts at 0.
    pub weight: f64,
}

impl Link {
    fn new(a: usize, b: usize) -> Self {
        debug_assert!(a < b);
        Self { a, b, weight: 0.0 }
    }

    /// The endpoint that is not `particle`.
    #[inline]
    pub fn other(&self, particle: usize) -> usize {
        if self.a == particle {
            self.b
        } else {
            self.a
        }
    }

    /// Whether the link should be drawn at all.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.weight > 0.0
    }
}

/// How the per-particle rankings combine into one close set.
///
/// Each particle ranks its own links, so the two endpoints of a link can
/// disagree about it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseRule {
    /// Close when either endpoint ranks the link in its top `k`.
    #[default]
    Either,
    /// Close only when the lower-index endpoint ranks it in its top `k`.
    Owner,
}

/// Links selected as close for one tick, with O(1) membership tests.
#[derive(Clone, Debug, PartialEq)]
pub struct CloseSet {
    members: Vec<bool>,
    len: usize,
}

impl CloseSet {
    fn empty(link_count: usize) -> Self {
        Self {
            members: vec![false; link_count],
            len: 0,
        }
    }

    fn insert(&mut self, id: LinkId) {
        if !self.members[id] {
            self.members[id] = true;
            self.len += 1;
        }
    }

    #[inline]
    pub fn contains(&self, id: LinkId) -> bool {
        self.members.get(id).copied().unwrap_or(false)
    }

    /// Number of distinct close links.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Links whose visibility flipped during one weight update.
///
/// A retained-mode renderer creates a drawable for each `appeared` link and
/// drops the drawable of each `retracted` one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeightChanges {
    /// Weight went from 0 to positive.
    pub appeared: Vec<LinkId>,
    /// Weight went from positive back to 0.
    pub retracted: Vec<LinkId>,
}

/// One drawable piece of a link.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkSegment {
    pub link: LinkId,
    pub segment: Segment,
    /// The link's weight.
    pub opacity: f64,
    /// Whether this is one half of a link crossing an edge.
    pub split: bool,
}

/// Complete graph over a fixed particle set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinkGraph {
    links: Vec<Link>,
    /// Link ids touching each particle, in creation order.
    incident: Vec<Vec<LinkId>>,
}

impl LinkGraph {
    /// Build one zero-weight link per unordered pair of `particle_count`
    /// particles.
    pub fn new(particle_count: usize) -> Self {
        let link_count = particle_count * particle_count.saturating_sub(1) / 2;
        let mut links = Vec::with_capacity(link_count);
        let mut incident = vec![Vec::new(); particle_count];

        for a in 0..particle_count {
            for b in (a + 1)..particle_count {
                let id = links.len();
                links.push(Link::new(a, b));
                incident[a].push(id);
                incident[b].push(id);
            }
        }

        Self { links, incident }
    }

    /// Build the graph for an existing particle set.
    pub fn initialize(particles: &ParticleSet) -> Self {
        Self::new(particles.len())
    }

    /// Id of the link between particles `i` and `j` in a graph over `n`
    /// particles. Order of `i` and `j` does not matter.
    pub fn pair_index(i: usize, j: usize, n: usize) -> LinkId {
        debug_assert!(i != j && i < n && j < n);
        let (a, b) = if i < j { (i, j) } else { (j, i) };
        a * (2 * n - a - 1) / 2 + (b - a - 1)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Number of particles the graph was built for.
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.incident.len()
    }

    #[inline]
    pub fn link(&self, id: LinkId) -> &Link {
        &self.links[id]
    }

    #[inline]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Ids of every link touching `particle`.
    #[inline]
    pub fn incident(&self, particle: usize) -> &[LinkId] {
        &self.incident[particle]
    }

    /// Select the close links for this tick.
    ///
    /// Every particle ranks its links by wrapped distance to the other
    /// endpoint (stable, so equal distances keep creation order) and votes for
    /// the first `k`. `k` larger than the number of neighbors selects all of
    /// them.
    ///
    /// # Panics
    ///
    /// Panics if `particles` does not hold exactly the number of particles the
    /// graph was built for.
    pub fn close_set(
        &self,
        particles: &ParticleSet,
        surface: Surface,
        k: usize,
        rule: CloseRule,
    ) -> CloseSet {
        assert_eq!(
            particles.len(),
            self.particle_count(),
            "particle set does not match the link graph"
        );
        let mut close = CloseSet::empty(self.links.len());
        if k == 0 {
            return close;
        }

        let mut ranked: Vec<(f64, LinkId)> =
            Vec::with_capacity(self.particle_count().saturating_sub(1));

        for (particle, incident) in self.incident.iter().enumerate() {
            let origin = particles[particle].position;
            ranked.clear();
            ranked.extend(incident.iter().map(|&id| {
                let other = self.links[id].other(particle);
                (wrapped_distance(origin, particles[other].position, surface), id)
            }));
            ranked.sort_by(|l, r| l.0.total_cmp(&r.0));

            for &(_, id) in ranked.iter().take(k) {
                if rule == CloseRule::Owner && self.links[id].a != particle {
                    continue;
                }
                close.insert(id);
            }
        }

        close
    }

    /// Move every weight one step toward 1 if close, toward 0 otherwise.
    ///
    /// The step is `decay * dt`. Weights are clamped to `[0, 1]`, so a
    /// negative `dt` reverses the direction without leaving the range.
    pub fn update_weights(&mut self, close: &CloseSet, dt: f64, decay: f64) -> WeightChanges {
        let step = decay * dt;
        let mut changes = WeightChanges::default();

        for (id, link) in self.links.iter_mut().enumerate() {
            let was_active = link.is_active();
            let target = if close.contains(id) {
                link.weight + step
            } else {
                link.weight - step
            };
            link.weight = target.clamp(0.0, 1.0);

            match (was_active, link.is_active()) {
                (false, true) => changes.appeared.push(id),
                (true, false) => changes.retracted.push(id),
                _ => {}
            }
        }

        changes
    }

    /// Segments for every link with positive weight, in link id order.
    ///
    /// A link crossing an edge yields two segments, each with the link's
    /// weight as opacity.
    pub fn render_geometry(&self, particles: &ParticleSet, surface: Surface) -> Vec<LinkSegment> {
        let mut segments = Vec::new();

        for (id, link) in self.links.iter().enumerate() {
            if !link.is_active() {
                continue;
            }
            let wrapped = split_wrapped_segment(
                particles[link.a].position,
                particles[link.b].position,
                surface,
            );
            let split = wrapped.is_split();
            segments.extend(wrapped.segments().map(|segment| LinkSegment {
                link: id,
                segment,
                opacity: link.weight,
                split,
            }));
        }

        segments
    }

    #[cfg(test)]
    pub(crate) fn set_weight(&mut self, id: LinkId, weight: f64) {
        self.links[id].weight = weight;
    }
}
