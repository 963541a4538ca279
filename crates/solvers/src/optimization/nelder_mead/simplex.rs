use super::{Direction, Point, Solution, point::Vertex};

/// The working set of `N + 1` evaluated vertices.
///
/// Between iterations the vertices are sorted by score, best first. Every
/// geometric query below relies on that order.
pub(super) struct Simplex<I, O, const N: usize> {
    vertices: Vec<Vertex<I, O, N>>,
}

impl<I, O, const N: usize> Simplex<I, O, N> {
    /// Builds a sorted simplex from `N + 1` evaluated vertices.
    pub(super) fn new(vertices: Vec<Vertex<I, O, N>>) -> Self {
        debug_assert_eq!(vertices.len(), N + 1, "simplex needs N + 1 vertices");
        let mut simplex = Self { vertices };
        simplex.sort();
        simplex
    }

    /// Stable sort by score, best first.
    pub(super) fn sort(&mut self) {
        self.vertices.sort_by(|a, b| a.score().total_cmp(&b.score()));
    }

    pub(super) fn len(&self) -> usize {
        self.vertices.len()
    }

    pub(super) fn best(&self) -> &Vertex<I, O, N> {
        &self.vertices[0]
    }

    pub(super) fn second_worst(&self) -> &Vertex<I, O, N> {
        &self.vertices[self.len() - 2]
    }

    pub(super) fn worst(&self) -> &Vertex<I, O, N> {
        &self.vertices[self.len() - 1]
    }

    /// Mean position of every vertex except the worst.
    pub(super) fn centroid(&self) -> [f64; N] {
        let others = &self.vertices[..self.len() - 1];
        #[allow(clippy::cast_precision_loss)]
        let count = others.len() as f64;
        std::array::from_fn(|i| others.iter().map(|v| v.x()[i]).sum::<f64>() / count)
    }

    /// Returns `centroid + coef * (centroid - worst)`.
    pub(super) fn project(&self, centroid: &[f64; N], coef: f64) -> [f64; N] {
        let worst = self.worst().x();
        std::array::from_fn(|i| centroid[i] + coef * (centroid[i] - worst[i]))
    }

    /// Returns `best + coef * (vertex - best)` for the vertex at `index`.
    pub(super) fn shrink_toward_best(&self, index: usize, coef: f64) -> [f64; N] {
        let best = self.best().x();
        let vertex = self.vertices[index].x();
        std::array::from_fn(|i| best[i] + coef * (vertex[i] - best[i]))
    }

    pub(super) fn replace_worst(&mut self, vertex: Vertex<I, O, N>) {
        let last = self.len() - 1;
        self.vertices[last] = vertex;
    }

    pub(super) fn replace(&mut self, index: usize, vertex: Vertex<I, O, N>) {
        self.vertices[index] = vertex;
    }

    /// Raw vertex positions, best first.
    pub(super) fn positions(&self) -> Vec<[f64; N]> {
        self.vertices.iter().map(|v| *v.x()).collect()
    }

    pub(super) fn into_solution(
        mut self,
        direction: Direction,
        iters: usize,
        evals: usize,
    ) -> Solution<I, O, N> {
        let simplex: Vec<Point<N>> = self
            .vertices
            .iter()
            .map(|v| v.to_point(direction))
            .collect();
        let best = simplex[0];
        let snapshot = self.vertices.swap_remove(0).into_snapshot();

        Solution {
            x: best.x,
            objective: best.objective,
            snapshot,
            simplex,
            iters,
            evals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn vertex<const N: usize>(x: [f64; N], score: f64) -> Vertex<(), (), N> {
        Vertex::new(x, score, None)
    }

    fn triangle() -> Simplex<(), (), 2> {
        Simplex::new(vec![
            vertex([4.0, 0.0], 3.0),
            vertex([0.0, 0.0], 1.0),
            vertex([0.0, 2.0], 2.0),
        ])
    }

    #[test]
    fn new_sorts_best_first() {
        let simplex = triangle();

        assert_eq!(simplex.len(), 3);
        assert_eq!(simplex.best().x(), &[0.0, 0.0]);
        assert_eq!(simplex.second_worst().x(), &[0.0, 2.0]);
        assert_eq!(simplex.worst().x(), &[4.0, 0.0]);
    }

    #[test]
    fn sort_places_infinite_scores_last_and_keeps_ties_stable() {
        let mut simplex = Simplex::new(vec![vertex([1.0], f64::INFINITY), vertex([2.0], 5.0)]);
        assert_eq!(simplex.worst().x(), &[1.0]);

        simplex.replace_worst(vertex([3.0], 5.0));
        simplex.sort();
        assert_eq!(simplex.positions(), vec![[2.0], [3.0]]);
    }

    #[test]
    fn centroid_excludes_worst() {
        let simplex = triangle();
        let centroid = simplex.centroid();

        assert_relative_eq!(centroid[0], 0.0);
        assert_relative_eq!(centroid[1], 1.0);
    }

    #[test]
    fn project_moves_along_worst_to_centroid_line() {
        let simplex = triangle();
        let centroid = simplex.centroid();

        let reflected = simplex.project(&centroid, 1.0);
        assert_relative_eq!(reflected[0], -4.0);
        assert_relative_eq!(reflected[1], 2.0);

        let inside = simplex.project(&centroid, -0.5);
        assert_relative_eq!(inside[0], 2.0);
        assert_relative_eq!(inside[1], 0.5);
    }

    #[test]
    fn shrink_pulls_toward_best() {
        let simplex = triangle();

        let pulled = simplex.shrink_toward_best(2, 0.5);
        assert_relative_eq!(pulled[0], 2.0);
        assert_relative_eq!(pulled[1], 0.0);
    }

    #[test]
    fn one_dimensional_second_worst_is_best() {
        let simplex = Simplex::new(vec![vertex([9.0], 2.0), vertex([1.0], 1.0)]);

        assert_eq!(simplex.second_worst().x(), simplex.best().x());
        assert_eq!(simplex.centroid(), [1.0]);
    }

    #[test]
    fn into_solution_undoes_direction() {
        let simplex = Simplex::new(vec![vertex([1.0], -4.0), vertex([2.0], f64::INFINITY)]);

        let solution = simplex.into_solution(Direction::Maximize, 7, 11);

        assert_eq!(solution.x, [1.0]);
        assert_relative_eq!(solution.objective, 4.0);
        assert_eq!(solution.simplex[1].objective, f64::NEG_INFINITY);
        assert_eq!(solution.iters, 7);
        assert_eq!(solution.evals, 11);
        assert!(solution.is_feasible());
    }
}
