//! Minimal scene graph: named nodes with translations, local bounds and an
//! emphasis flag. Only translations compose; the device model never rotates
//! or scales its pads.

use crate::camera::Ray;
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Axis-aligned box in the node's local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn translated(&self, by: Vec3) -> Self {
        Self {
            min: self.min + by,
            max: self.max + by,
        }
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }

    /// Slab test; returns entry distance along the ray (0 when starting inside).
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;
        for axis in 0..3 {
            let (o, d) = (ray.origin[axis], ray.dir[axis]);
            let (lo, hi) = (self.min[axis], self.max[axis]);
            // Parallel to this slab: either always inside it or never.
            if d == 0.0 {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let (a, b) = ((lo - o) / d, (hi - o) / d);
            t_near = t_near.max(a.min(b));
            t_far = t_far.min(a.max(b));
        }
        if t_far < 0.0 || t_near > t_far {
            return None;
        }
        Some(t_near.max(0.0))
    }
}

#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: String,
    pub position: Vec3,
    /// Local bounds; nodes without geometry are never hit themselves.
    pub bounds: Option<Aabb>,
    /// The selected/highlighted indicator.
    pub emphasis: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SceneNode {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// One ray hit, nearest first when produced by [`SceneGraph::intersect`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub node: NodeId,
    pub distance: f32,
}

pub type Hits = SmallVec<[Hit; 8]>;

#[derive(Clone, Debug)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    /// New graph with a single root node.
    pub fn new(root_name: &str) -> Self {
        Self {
            nodes: vec![SceneNode {
                name: root_name.to_string(),
                position: Vec3::ZERO,
                bounds: None,
                emphasis: false,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: &str,
        position: Vec3,
        bounds: Option<Aabb>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SceneNode {
            name: name.to_string(),
            position,
            bounds,
            emphasis: false,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SceneNode {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node with `name`, searched depth-first from the root.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            if node.name == name {
                return Some(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    pub fn world_position(&self, id: NodeId) -> Vec3 {
        let mut pos = Vec3::ZERO;
        let mut cur = Some(id);
        while let Some(c) = cur {
            let n = &self.nodes[c.0];
            pos += n.position;
            cur = n.parent;
        }
        pos
    }

    pub fn world_bounds(&self, id: NodeId) -> Option<Aabb> {
        self.nodes[id.0]
            .bounds
            .map(|b| b.translated(self.world_position(id)))
    }

    /// Is `id` equal to `ancestor` or somewhere below it?
    pub fn is_within(&self, id: NodeId, ancestor: NodeId) -> bool {
        let mut cur = Some(id);
        while let Some(c) = cur {
            if c == ancestor {
                return true;
            }
            cur = self.nodes[c.0].parent;
        }
        false
    }

    /// Intersect the ray against every node with bounds (recursive from the
    /// root), nearest first.
    pub fn intersect(&self, ray: &Ray) -> Hits {
        let mut hits = Hits::new();
        let mut stack = vec![(self.root(), Vec3::ZERO)];
        while let Some((id, parent_pos)) = stack.pop() {
            let node = &self.nodes[id.0];
            let world = parent_pos + node.position;
            if let Some(distance) = node.bounds.and_then(|b| b.translated(world).intersect(ray)) {
                hits.push(Hit { node: id, distance });
            }
            stack.extend(node.children.iter().map(|c| (*c, world)));
        }
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}
