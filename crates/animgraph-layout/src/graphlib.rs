//! Directed multigraph container used by the layered pipeline.
//!
//! Baseline: `@dagrejs/graphlib` (directed, multigraph, non-compound subset). Nodes and edges
//! keep insertion order, which every phase relies on for deterministic output. Removed entries
//! are tombstoned so edge/node slots never shift while adjacency lists point at them.

use rustc_hash::FxHashMap as HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub v: String,
    pub w: String,
    pub name: Option<String>,
}

impl EdgeKey {
    pub fn new(
        v: impl Into<String>,
        w: impl Into<String>,
        name: Option<impl Into<String>>,
    ) -> Self {
        Self {
            v: v.into(),
            w: w.into(),
            name: name.map(Into::into),
        }
    }
}

#[derive(Debug, Clone)]
struct NodeEntry<N> {
    id: String,
    label: N,
}

#[derive(Debug, Clone)]
struct EdgeEntry<E> {
    key: EdgeKey,
    label: E,
}

#[derive(Debug, Clone)]
pub struct Graph<N, E, G> {
    graph_label: G,

    nodes: Vec<Option<NodeEntry<N>>>,
    node_index: HashMap<String, usize>,

    edges: Vec<Option<EdgeEntry<E>>>,
    edge_index: HashMap<EdgeKey, usize>,

    out_adj: HashMap<String, Vec<usize>>,
    in_adj: HashMap<String, Vec<usize>>,
}

impl<N, E, G> Default for Graph<N, E, G>
where
    N: Default,
    E: Default,
    G: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E, G> Graph<N, E, G>
where
    N: Default,
    E: Default,
    G: Default,
{
    pub fn new() -> Self {
        Self {
            graph_label: G::default(),
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
            out_adj: HashMap::default(),
            in_adj: HashMap::default(),
        }
    }

    pub fn set_graph(&mut self, label: G) -> &mut Self {
        self.graph_label = label;
        self
    }

    pub fn graph(&self) -> &G {
        &self.graph_label
    }

    pub fn graph_mut(&mut self) -> &mut G {
        &mut self.graph_label
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if let Some(&idx) = self.node_index.get(&id) {
            if let Some(entry) = self.nodes[idx].as_mut() {
                entry.label = label;
            }
            return self;
        }
        let idx = self.nodes.len();
        self.nodes.push(Some(NodeEntry {
            id: id.clone(),
            label,
        }));
        self.node_index.insert(id, idx);
        self
    }

    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if self.node_index.contains_key(&id) {
            return self;
        }
        self.set_node(id, N::default())
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        let idx = *self.node_index.get(id)?;
        self.nodes[idx].as_ref().map(|n| &n.label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        let idx = *self.node_index.get(id)?;
        self.nodes[idx].as_mut().map(|n| &mut n.label)
    }

    pub fn node_count(&self) -> usize {
        self.node_index.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().flatten().map(|n| n.id.as_str())
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes().map(str::to_string).collect()
    }

    pub fn for_each_node_mut(&mut self, mut f: impl FnMut(&str, &mut N)) {
        for entry in self.nodes.iter_mut().flatten() {
            f(&entry.id, &mut entry.label);
        }
    }

    /// Nodes without incoming edges, in insertion order.
    pub fn sources(&self) -> Vec<&str> {
        self.nodes()
            .filter(|v| self.in_adj.get(*v).is_none_or(Vec::is_empty))
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_index.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter().flatten().map(|e| &e.key)
    }

    pub fn edge_keys(&self) -> Vec<EdgeKey> {
        self.edges().cloned().collect()
    }

    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>) -> &mut Self {
        self.set_edge_named(v, w, None::<String>, None)
    }

    pub fn set_edge_named(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        name: Option<impl Into<String>>,
        label: Option<E>,
    ) -> &mut Self {
        let key = EdgeKey::new(v, w, name);
        self.ensure_node(key.v.clone());
        self.ensure_node(key.w.clone());

        if let Some(&idx) = self.edge_index.get(&key) {
            if let (Some(label), Some(entry)) = (label, self.edges[idx].as_mut()) {
                entry.label = label;
            }
            return self;
        }

        let idx = self.edges.len();
        self.out_adj.entry(key.v.clone()).or_default().push(idx);
        self.in_adj.entry(key.w.clone()).or_default().push(idx);
        self.edge_index.insert(key.clone(), idx);
        self.edges.push(Some(EdgeEntry {
            key,
            label: label.unwrap_or_default(),
        }));
        self
    }

    pub fn set_path(&mut self, nodes: &[&str]) -> &mut Self {
        for pair in nodes.windows(2) {
            self.set_edge(pair[0], pair[1]);
        }
        self
    }

    pub fn has_edge(&self, v: &str, w: &str, name: Option<&str>) -> bool {
        self.edge_index.contains_key(&EdgeKey::new(v, w, name))
    }

    pub fn edge(&self, v: &str, w: &str, name: Option<&str>) -> Option<&E> {
        self.edge_by_key(&EdgeKey::new(v, w, name))
    }

    pub fn edge_by_key(&self, key: &EdgeKey) -> Option<&E> {
        let idx = *self.edge_index.get(key)?;
        self.edges[idx].as_ref().map(|e| &e.label)
    }

    pub fn remove_edge_key(&mut self, key: &EdgeKey) -> Option<E> {
        let idx = self.edge_index.remove(key)?;
        if let Some(out) = self.out_adj.get_mut(&key.v) {
            out.retain(|&i| i != idx);
        }
        if let Some(ins) = self.in_adj.get_mut(&key.w) {
            ins.retain(|&i| i != idx);
        }
        self.edges[idx].take().map(|e| e.label)
    }

    /// Removes `id` and every incident edge.
    pub fn remove_node(&mut self, id: &str) -> Option<N> {
        let incident: Vec<EdgeKey> = self
            .out_edges(id)
            .into_iter()
            .chain(self.in_edges(id))
            .collect();
        for key in incident {
            self.remove_edge_key(&key);
        }
        self.out_adj.remove(id);
        self.in_adj.remove(id);

        let idx = self.node_index.remove(id)?;
        self.nodes[idx].take().map(|n| n.label)
    }

    pub fn out_edges(&self, v: &str) -> Vec<EdgeKey> {
        self.adjacent(&self.out_adj, v)
    }

    pub fn in_edges(&self, v: &str) -> Vec<EdgeKey> {
        self.adjacent(&self.in_adj, v)
    }

    pub fn successors(&self, v: &str) -> Vec<&str> {
        self.adjacent_entries(&self.out_adj, v)
            .map(|e| e.key.w.as_str())
            .collect()
    }

    pub fn predecessors(&self, v: &str) -> Vec<&str> {
        self.adjacent_entries(&self.in_adj, v)
            .map(|e| e.key.v.as_str())
            .collect()
    }

    fn adjacent(&self, adj: &HashMap<String, Vec<usize>>, v: &str) -> Vec<EdgeKey> {
        self.adjacent_entries(adj, v).map(|e| e.key.clone()).collect()
    }

    fn adjacent_entries<'a>(
        &'a self,
        adj: &'a HashMap<String, Vec<usize>>,
        v: &str,
    ) -> impl Iterator<Item = &'a EdgeEntry<E>> + 'a {
        adj.get(v)
            .into_iter()
            .flatten()
            .filter_map(|&idx| self.edges[idx].as_ref())
    }
}

pub mod alg {
    use super::Graph;
    use rustc_hash::FxHashMap as HashMap;

    /// Strongly connected components with more than one node, or single nodes with a self-loop.
    ///
    /// Tarjan's algorithm, visiting nodes and successors in insertion order.
    pub fn find_cycles<N, E, G>(g: &Graph<N, E, G>) -> Vec<Vec<String>>
    where
        N: Default,
        E: Default,
        G: Default,
    {
        struct Tarjan {
            index: usize,
            stack: Vec<String>,
            on_stack: HashMap<String, bool>,
            indices: HashMap<String, usize>,
            lowlink: HashMap<String, usize>,
            sccs: Vec<Vec<String>>,
        }

        fn strongconnect<N, E, G>(g: &Graph<N, E, G>, v: &str, t: &mut Tarjan)
        where
            N: Default,
            E: Default,
            G: Default,
        {
            t.indices.insert(v.to_string(), t.index);
            t.lowlink.insert(v.to_string(), t.index);
            t.index += 1;
            t.stack.push(v.to_string());
            t.on_stack.insert(v.to_string(), true);

            for w in g.successors(v) {
                if !t.indices.contains_key(w) {
                    strongconnect(g, w, t);
                    let low = t.lowlink[v].min(t.lowlink[w]);
                    t.lowlink.insert(v.to_string(), low);
                } else if t.on_stack.get(w).copied().unwrap_or(false) {
                    let low = t.lowlink[v].min(t.indices[w]);
                    t.lowlink.insert(v.to_string(), low);
                }
            }

            if t.lowlink[v] == t.indices[v] {
                let mut scc: Vec<String> = Vec::new();
                while let Some(w) = t.stack.pop() {
                    t.on_stack.insert(w.clone(), false);
                    let done = w == v;
                    scc.push(w);
                    if done {
                        break;
                    }
                }
                t.sccs.push(scc);
            }
        }

        let mut t = Tarjan {
            index: 0,
            stack: Vec::new(),
            on_stack: HashMap::default(),
            indices: HashMap::default(),
            lowlink: HashMap::default(),
            sccs: Vec::new(),
        };
        for v in g.nodes() {
            if !t.indices.contains_key(v) {
                strongconnect(g, v, &mut t);
            }
        }

        t.sccs
            .into_iter()
            .filter(|scc| scc.len() > 1 || g.successors(&scc[0]).contains(&scc[0].as_str()))
            .collect()
    }
}
