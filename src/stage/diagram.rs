//! Node-and-edge layout for each stage, in world space (y up).

use bevy::prelude::*;

use crate::constants::{NODE_HEIGHT, NODE_WIDTH};
use crate::theme;

use super::catalog::Stage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    Client,
    Origin,
    Route53,
    Route53Cached,
    CloudflareDns,
    CloudflareProxy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagramNode {
    pub id: NodeId,
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Center of the node box
    pub position: Vec2,
    /// Clicking the node opens the feature panel
    pub has_features: bool,
}

impl DiagramNode {
    fn new(id: NodeId, icon: &'static str, title: &'static str, subtitle: &'static str, position: Vec2) -> Self {
        Self {
            id,
            icon,
            title,
            subtitle,
            position,
            has_features: false,
        }
    }

    pub fn size() -> Vec2 {
        Vec2::new(NODE_WIDTH, NODE_HEIGHT)
    }

    /// Connection point for outgoing edges (bottom center)
    pub fn source_anchor(&self) -> Vec2 {
        self.position - Vec2::new(0.0, NODE_HEIGHT / 2.0)
    }

    /// Connection point for incoming edges (top center)
    pub fn target_anchor(&self) -> Vec2 {
        self.position + Vec2::new(0.0, NODE_HEIGHT / 2.0)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let half = Self::size() / 2.0;
        (point.x - self.position.x).abs() <= half.x && (point.y - self.position.y).abs() <= half.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Dns,
    Direct,
    ProxyClient,
    ProxyOrigin,
}

impl EdgeKind {
    pub fn color(&self) -> Color {
        match self {
            EdgeKind::Dns => theme::EDGE_DNS,
            EdgeKind::Direct => theme::EDGE_DIRECT,
            EdgeKind::ProxyClient => theme::EDGE_PROXY_CLIENT,
            EdgeKind::ProxyOrigin => theme::EDGE_PROXY_ORIGIN,
        }
    }

    pub fn is_dashed(&self) -> bool {
        matches!(self, EdgeKind::Dns)
    }

    pub fn legend_label(&self) -> &'static str {
        match self {
            EdgeKind::Dns => "DNS Query",
            EdgeKind::Direct => "Direct Connection",
            EdgeKind::ProxyClient => "Client → Cloudflare",
            EdgeKind::ProxyOrigin => "Cloudflare → Origin",
        }
    }

    pub fn all() -> &'static [EdgeKind] {
        &[
            EdgeKind::Dns,
            EdgeKind::Direct,
            EdgeKind::ProxyClient,
            EdgeKind::ProxyOrigin,
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagramEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub kind: EdgeKind,
    pub label: &'static str,
    /// Dashes scroll along the edge
    pub animated: bool,
}

impl DiagramEdge {
    fn new(source: NodeId, target: NodeId, kind: EdgeKind, label: &'static str, animated: bool) -> Self {
        Self {
            source,
            target,
            kind,
            label,
            animated,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Diagram {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}

impl Diagram {
    pub fn node(&self, id: NodeId) -> Option<&DiagramNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Start and end points of an edge, if both ends exist
    pub fn edge_endpoints(&self, edge: &DiagramEdge) -> Option<(Vec2, Vec2)> {
        let source = self.node(edge.source)?;
        let target = self.node(edge.target)?;
        Some((source.source_anchor(), target.target_anchor()))
    }

    /// Topmost node under a world-space point
    pub fn node_at(&self, point: Vec2) -> Option<&DiagramNode> {
        self.nodes.iter().rev().find(|node| node.contains(point))
    }
}

/// Layout for `stage`. Client and origin appear in every stage.
pub fn build_diagram(stage: Stage) -> Diagram {
    let mut nodes = vec![
        DiagramNode::new(
            NodeId::Client,
            "💻",
            "Client Browser",
            "End User",
            Vec2::new(0.0, 170.0),
        ),
        DiagramNode::new(
            NodeId::Origin,
            "🖥",
            "Origin Server",
            "Nginx",
            Vec2::new(0.0, -170.0),
        ),
    ];

    let edges = match stage {
        Stage::Before => {
            nodes.push(DiagramNode::new(
                NodeId::Route53,
                "📘",
                "Route53 DNS",
                "Basic DNS Service",
                Vec2::new(-200.0, 0.0),
            ));
            vec![
                DiagramEdge::new(NodeId::Client, NodeId::Route53, EdgeKind::Dns, "DNS Query", true),
                DiagramEdge::new(
                    NodeId::Client,
                    NodeId::Origin,
                    EdgeKind::Direct,
                    "Direct Connection",
                    false,
                ),
            ]
        }
        Stage::DnsOnly => {
            nodes.push(DiagramNode::new(
                NodeId::Route53Cached,
                "📘",
                "Route53 (Cached)",
                "During Propagation",
                Vec2::new(-160.0, 0.0),
            ));
            nodes.push(DiagramNode::new(
                NodeId::CloudflareDns,
                "🌐",
                "Cloudflare DNS",
                "New Authoritative",
                Vec2::new(160.0, 0.0),
            ));
            vec![
                DiagramEdge::new(
                    NodeId::Client,
                    NodeId::Route53Cached,
                    EdgeKind::Dns,
                    "Cached DNS",
                    true,
                ),
                DiagramEdge::new(
                    NodeId::Client,
                    NodeId::CloudflareDns,
                    EdgeKind::Dns,
                    "New DNS Query",
                    true,
                ),
                DiagramEdge::new(NodeId::Route53Cached, NodeId::Origin, EdgeKind::Dns, "", true),
                DiagramEdge::new(NodeId::CloudflareDns, NodeId::Origin, EdgeKind::Dns, "", true),
            ]
        }
        Stage::Proxy => {
            let mut proxy = DiagramNode::new(
                NodeId::CloudflareProxy,
                "🛡",
                "Cloudflare Proxy",
                "Security & Performance Layer",
                Vec2::new(0.0, 0.0),
            );
            proxy.has_features = true;
            nodes.push(proxy);
            vec![
                DiagramEdge::new(
                    NodeId::Client,
                    NodeId::CloudflareProxy,
                    EdgeKind::ProxyClient,
                    "Secure HTTPS\nTLS 1.3 Encrypted",
                    true,
                ),
                DiagramEdge::new(
                    NodeId::CloudflareProxy,
                    NodeId::Origin,
                    EdgeKind::ProxyOrigin,
                    "",
                    true,
                ),
            ]
        }
    };

    Diagram { nodes, edges }
}

/// Split the segment `start..end` into dashes. `phase` shifts the pattern
/// along the segment (any value; it wraps at one dash + gap period).
pub fn dash_segments(start: Vec2, end: Vec2, dash: f32, gap: f32, phase: f32) -> Vec<(Vec2, Vec2)> {
    let length = start.distance(end);
    let period = dash + gap;
    if length <= f32::EPSILON || dash <= 0.0 || period <= 0.0 {
        return Vec::new();
    }

    let direction = (end - start) / length;
    let mut segments = Vec::new();
    // Begin one period early so a dash cut by the start still shows its tail
    let mut offset = phase.rem_euclid(period) - period;
    while offset < length {
        let from = offset.max(0.0);
        let to = (offset + dash).min(length);
        if to > from {
            segments.push((start + direction * from, start + direction * to));
        }
        offset += period;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_stage_has_client_and_origin() {
        for stage in Stage::all() {
            let diagram = build_diagram(*stage);
            assert!(diagram.node(NodeId::Client).is_some(), "{:?}", stage);
            assert!(diagram.node(NodeId::Origin).is_some(), "{:?}", stage);
        }
    }

    #[test]
    fn test_edges_reference_existing_nodes() {
        for stage in Stage::all() {
            let diagram = build_diagram(*stage);
            for edge in &diagram.edges {
                assert!(
                    diagram.edge_endpoints(edge).is_some(),
                    "{:?}: dangling edge {:?}",
                    stage,
                    edge
                );
            }
        }
    }

    #[test]
    fn test_before_has_direct_connection() {
        let diagram = build_diagram(Stage::Before);
        assert_eq!(diagram.nodes.len(), 3);
        assert!(diagram
            .edges
            .iter()
            .any(|e| e.kind == EdgeKind::Direct && e.target == NodeId::Origin));
    }

    #[test]
    fn test_dns_only_has_two_resolvers() {
        let diagram = build_diagram(Stage::DnsOnly);
        assert!(diagram.node(NodeId::Route53Cached).is_some());
        assert!(diagram.node(NodeId::CloudflareDns).is_some());
        assert_eq!(diagram.edges.len(), 4);
        assert!(diagram.edges.iter().all(|e| e.kind == EdgeKind::Dns));
    }

    #[test]
    fn test_only_proxy_node_has_features() {
        for stage in Stage::all() {
            for node in build_diagram(*stage).nodes {
                assert_eq!(node.has_features, node.id == NodeId::CloudflareProxy);
            }
        }
    }

    #[test]
    fn test_proxy_routes_all_traffic_through_edge() {
        let diagram = build_diagram(Stage::Proxy);
        let kinds: Vec<EdgeKind> = diagram.edges.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EdgeKind::ProxyClient, EdgeKind::ProxyOrigin]);
        assert!(!diagram.edges.iter().any(|e| e.kind == EdgeKind::Direct));
    }

    #[test]
    fn test_node_at_hits_box() {
        let diagram = build_diagram(Stage::Proxy);
        let hit = diagram.node_at(Vec2::new(10.0, -5.0)).map(|n| n.id);
        assert_eq!(hit, Some(NodeId::CloudflareProxy));
        assert!(diagram.node_at(Vec2::new(500.0, 500.0)).is_none());
    }

    #[test]
    fn test_anchors_are_on_box_edges() {
        let diagram = build_diagram(Stage::Before);
        let client = diagram.node(NodeId::Client).unwrap();
        assert_eq!(client.source_anchor().y, client.position.y - NODE_HEIGHT / 2.0);
        assert_eq!(client.target_anchor().y, client.position.y + NODE_HEIGHT / 2.0);
    }

    #[test]
    fn test_dash_segments_cover_pattern() {
        let segments = dash_segments(Vec2::ZERO, Vec2::new(50.0, 0.0), 10.0, 5.0, 0.0);
        let starts: Vec<f32> = segments.iter().map(|(a, _)| a.x).collect();
        assert_eq!(starts, vec![0.0, 15.0, 30.0, 45.0]);
        // Last dash is clipped at the end of the segment
        assert_eq!(segments.last().unwrap().1.x, 50.0);
    }

    #[test]
    fn test_dash_segments_phase_shifts_pattern() {
        let segments = dash_segments(Vec2::ZERO, Vec2::new(30.0, 0.0), 10.0, 5.0, 10.0);
        // Tail of the previous dash shows at the start
        assert_eq!(segments[0], (Vec2::ZERO, Vec2::new(5.0, 0.0)));
        assert_eq!(segments[1], (Vec2::new(10.0, 0.0), Vec2::new(20.0, 0.0)));
        assert_eq!(segments[2], (Vec2::new(25.0, 0.0), Vec2::new(30.0, 0.0)));
        assert_eq!(segments.len(), 3);
    }

    #[test]
    fn test_dash_segments_phase_wraps() {
        let a = dash_segments(Vec2::ZERO, Vec2::new(40.0, 0.0), 10.0, 5.0, 3.0);
        let b = dash_segments(Vec2::ZERO, Vec2::new(40.0, 0.0), 10.0, 5.0, 18.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_dash_segments_degenerate() {
        assert!(dash_segments(Vec2::ONE, Vec2::ONE, 10.0, 5.0, 0.0).is_empty());
        assert!(dash_segments(Vec2::ZERO, Vec2::X, 0.0, 5.0, 0.0).is_empty());
    }
}
