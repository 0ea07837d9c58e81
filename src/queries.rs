//! Fixed statement catalog
//!
//! Every Cypher string the gateway can run, plus the opaque GDS names
//! (projections, model) that must match what the out-of-band data-science
//! jobs created. Request input never reaches these strings; it is bound as
//! parameters only.

/// Election type bound when the request omits one
pub const DEFAULT_ELECTION_TYPE: &str = "PRESIDENT";

/// Projection read by the pretrained link-prediction model
pub const FULL_GRAPH: &str = "fullGraph";

/// Projection backing the degree-centrality endpoint
pub const CANDIDATE_ELECTION_GRAPH: &str = "candidateElectionGraph";

/// Projection backing the betweenness endpoint
pub const BETWEEN_GRAPH: &str = "betweenGraph";

/// Undirected projection backing the WCC endpoint
pub const COMPONENTS_GRAPH: &str = "componentsGraph";

/// Name of the pretrained link-prediction model
pub const LINK_PREDICTION_MODEL: &str = "model-candidate";

/// How many predictions the model streams back
pub const LINK_PREDICTION_TOP_N: i64 = 20;

/// Candidate votes per election year and party, for one election type
pub const ELECTION_VOTES: &str = "\
MATCH (e:Election {type: $type})
MATCH (c:Candidate)-[r:PARTICIPATED_IN]->(e)
RETURN e.year AS year, r.party AS party, sum(r.candidatevotes) AS candidate_votes";

/// Stream predictions from the pretrained link-prediction model
pub const CANDIDATE_PREDICTIONS: &str = "\
CALL gds.beta.pipeline.linkPrediction.predict.stream($graph, {modelName: $model, topN: $topN})
YIELD node1, node2, probability
RETURN gds.util.asNode(node1).name AS candidate1, gds.util.asNode(node2).name AS candidate2, probability
ORDER BY probability DESC, candidate1";

/// Create a named projection unless it already exists.
///
/// The exists-guard makes repeated calls idempotent instead of failing the
/// second create with a name collision.
pub const PROJECT_IF_ABSENT: &str = "\
CALL gds.graph.exists($name) YIELD exists
WITH exists WHERE NOT exists
CALL gds.graph.project($name, $nodes, $rels) YIELD graphName
RETURN graphName";

/// Degree centrality over a projection, named nodes only
pub const DEGREE_STREAM: &str = "\
CALL gds.degree.stream($graph)
YIELD nodeId, score
WITH gds.util.asNode(nodeId).name AS name, score
WHERE name IS NOT NULL
RETURN name, score
ORDER BY score DESC";

/// Betweenness centrality over a projection, positive scores only
pub const BETWEENNESS_STREAM: &str = "\
CALL gds.betweenness.stream($graph)
YIELD nodeId, score
WITH gds.util.asNode(nodeId).name AS name, score
WHERE score > 0
RETURN name, score
ORDER BY score DESC";

/// Weakly-connected components over a projection, first 10 members
pub const WCC_STREAM: &str = "\
CALL gds.wcc.stream($graph)
YIELD nodeId, componentId
RETURN gds.util.asNode(nodeId).name AS Candidate, componentId AS ComponentId
LIMIT 10";

/// Drop a named projection
pub const DROP_PROJECTION: &str = "CALL gds.graph.drop($projection)";

/// Node counts grouped by label set
pub const NODE_COUNT: &str = "\
MATCH (n)
RETURN labels(n) AS NodeType, count(*) AS TotalCount
ORDER BY TotalCount DESC";

/// Total node count
pub const TOTAL_NODES: &str = "MATCH (n) RETURN count(n) AS totalNodes";

/// Total relationship count
pub const TOTAL_RELATIONSHIPS: &str = "MATCH ()-[r]->() RETURN count(r) AS totalRelationships";

/// Nodes with no relationships in either direction
pub const ISOLATED_NODES: &str = "MATCH (n) WHERE NOT (n)--() RETURN count(n) AS isolatedNodes";

// Per-endpoint output projections: (output field, source column).

pub const ELECTION_VOTES_FIELDS: &[(&str, &str)] = &[
    ("year", "year"),
    ("party", "party"),
    ("candidate_votes", "candidate_votes"),
];

pub const PREDICTION_FIELDS: &[(&str, &str)] = &[
    ("candidate1", "candidate1"),
    ("candidate2", "candidate2"),
    ("probability", "probability"),
];

pub const SCORE_FIELDS: &[(&str, &str)] = &[("name", "name"), ("score", "score")];

pub const WCC_FIELDS: &[(&str, &str)] = &[
    ("Candidate", "Candidate"),
    ("ComponentId", "ComponentId"),
];

pub const NODE_COUNT_FIELDS: &[(&str, &str)] = &[
    ("NodeType", "NodeType"),
    ("TotalCount", "TotalCount"),
];

pub const TOTAL_NODES_FIELDS: &[(&str, &str)] = &[("totalNodes", "totalNodes")];

pub const TOTAL_RELATIONSHIPS_FIELDS: &[(&str, &str)] =
    &[("totalRelationships", "totalRelationships")];

pub const ISOLATED_NODES_FIELDS: &[(&str, &str)] = &[("isolatedNodes", "isolatedNodes")];
