//! Tests for the shared transform stage shape

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use sprite_outline::Result;
    use sprite_outline::generation::{
        BaseGenerator, DilationTransform, DrawAround, Mirror, MirrorTransform, SpriteGenerator,
        Transform,
    };
    use sprite_outline::spatial::{Dimensions, Grid};

    // Upstream that counts how often it is evaluated
    struct Counting {
        grid: Grid<bool>,
        calls: Rc<Cell<usize>>,
    }

    impl SpriteGenerator for Counting {
        fn dimensions(&self) -> Dimensions {
            self.grid.dimensions()
        }

        fn produce_grid(&mut self) -> Grid<bool> {
            self.calls.set(self.calls.get() + 1);
            self.grid.clone()
        }
    }

    // Tests every call re-evaluates the upstream stage
    // Verified by caching the first upstream grid in the stage
    #[test]
    fn test_upstream_evaluated_per_call() -> Result<()> {
        let calls = Rc::new(Cell::new(0));
        let upstream = Counting {
            grid: Grid::new(2, 2, false)?,
            calls: Rc::clone(&calls),
        };
        let mut stage = MirrorTransform::new(DilationTransform::new(upstream), false);

        for expected in 1..=3 {
            stage.produce_grid();
            assert_eq!(calls.get(), expected);
        }
        Ok(())
    }

    // Tests repeated calls are idempotent when the stream is reset
    // Verified by mutating rule state inside produce_grid
    #[test]
    fn test_repeated_calls_idempotent_after_reset() -> Result<()> {
        let mut stage = DilationTransform::new(MirrorTransform::new(
            BaseGenerator::new(6, 6, 21)?,
            true,
        ));
        let first = stage.produce_grid();
        let mut inner = stage.into_upstream().into_upstream();
        inner.reset_stream();

        let mut rebuilt = DilationTransform::new(MirrorTransform::new(inner, true));
        assert_eq!(rebuilt.produce_grid(), first);
        Ok(())
    }

    // Tests stage dimensions come from the rule applied to the upstream's
    // Verified by reporting the upstream dimensions unchanged
    #[test]
    fn test_dimensions_from_rule() -> Result<()> {
        let stage = Transform::from_parts(BaseGenerator::new(3, 4, 0)?, Mirror::new(true));
        assert_eq!((stage.width(), stage.height()), (6, 4));
        assert_eq!(stage.upstream().width(), 3);
        assert!(stage.rule().mirrors_to_left());

        let nested = DilationTransform::new(stage);
        assert_eq!((nested.width(), nested.height()), (6, 4));
        Ok(())
    }

    // Tests rules can be combined through boxed upstreams
    // Verified by dropping the inner stage when boxing
    #[test]
    fn test_boxed_chain() -> Result<()> {
        let base: Box<dyn SpriteGenerator> = Box::new(BaseGenerator::new(2, 3, 5)?);
        let mirrored: Box<dyn SpriteGenerator> =
            Box::new(Transform::from_parts(base, Mirror::new(false)));
        let mut outlined = Transform::from_parts(mirrored, DrawAround::new());

        let grid = outlined.produce_grid();
        assert_eq!((grid.width(), grid.height()), (4, 3));
        Ok(())
    }
}
