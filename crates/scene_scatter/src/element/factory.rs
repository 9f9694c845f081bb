//! Runtime registry mapping element type names to constructors.
//!
//! The factory owns one constructor per element type name. [`ElementFactory::register`]
//! admits new variants at runtime but probes each constructor first: a
//! constructor whose elements report degenerate bounds can never be placed by
//! the planner, so it is rejected with [`Error::InvalidElementType`] and the
//! registry is left unchanged.
use std::collections::HashMap;

use glam::Vec2;

use crate::color::Color;
use crate::element::style::ElementStyle;
use crate::element::{Bird, Cloud, Cow, Goat, Mountain, River, SceneElement, Star, Sun, Tree};
use crate::error::{Error, Result};

/// Constructor producing a styled element instance.
pub type ElementConstructor = Box<dyn Fn(ElementStyle) -> Box<dyn SceneElement> + Send + Sync>;

struct Registration {
    constructor: ElementConstructor,
    default_style: ElementStyle,
}

pub struct ElementFactory {
    registrations: HashMap<String, Registration>,
}

impl ElementFactory {
    /// Create an empty factory with no registered types.
    pub fn empty() -> Self {
        Self {
            registrations: HashMap::new(),
        }
    }

    /// Create an element of the named type with the default style it was
    /// registered with (the built-in palette for built-in types).
    pub fn create(&self, type_name: &str) -> Result<Box<dyn SceneElement>> {
        let registration = self.registration(type_name)?;
        Ok((registration.constructor)(registration.default_style))
    }

    /// Create an element of the named type with an explicit style.
    pub fn create_with_style(
        &self,
        type_name: &str,
        style: ElementStyle,
    ) -> Result<Box<dyn SceneElement>> {
        let registration = self.registration(type_name)?;
        Ok((registration.constructor)(style))
    }

    /// Register (or override) a variant under `type_name`, using a plain
    /// black style as the type's default.
    pub fn register(
        &mut self,
        type_name: impl Into<String>,
        constructor: ElementConstructor,
    ) -> Result<()> {
        self.register_with_style(type_name, constructor, ElementStyle::default())
    }

    /// Register (or override) a variant under `type_name` with the style
    /// [`ElementFactory::create`] falls back to.
    ///
    /// The constructor is probed with that style; if the probe's bounds are
    /// degenerate the registration fails and the factory is unchanged.
    pub fn register_with_style(
        &mut self,
        type_name: impl Into<String>,
        constructor: ElementConstructor,
        default_style: ElementStyle,
    ) -> Result<()> {
        let type_name = type_name.into();

        let probe = constructor(default_style);
        let bounds = probe.bounds(Vec2::ZERO);
        if bounds.is_degenerate() {
            return Err(Error::InvalidElementType {
                name: type_name,
                reason: "constructor produced an element with degenerate bounds".into(),
            });
        }

        self.registrations.insert(
            type_name,
            Registration {
                constructor,
                default_style,
            },
        );
        Ok(())
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.registrations.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    fn registration(&self, type_name: &str) -> Result<&Registration> {
        self.registrations
            .get(type_name)
            .ok_or_else(|| Error::UnknownElementType {
                name: type_name.to_owned(),
            })
    }
}

impl Default for ElementFactory {
    /// Factory pre-populated with the nine built-in variants, each carrying
    /// its type's default color.
    fn default() -> Self {
        let mut factory = Self::empty();
        let builtins: [(&str, ElementConstructor, Color); 9] = [
            (
                "sun",
                Box::new(|style| Box::new(Sun::new(style))),
                Sun::default_color(),
            ),
            (
                "tree",
                Box::new(|style| Box::new(Tree::new(style))),
                Tree::default_color(),
            ),
            (
                "bird",
                Box::new(|style| Box::new(Bird::new(style))),
                Bird::default_color(),
            ),
            (
                "mountain",
                Box::new(|style| Box::new(Mountain::new(style))),
                Mountain::default_color(),
            ),
            (
                "river",
                Box::new(|style| Box::new(River::new(style))),
                River::default_color(),
            ),
            (
                "cloud",
                Box::new(|style| Box::new(Cloud::new(style))),
                Cloud::default_color(),
            ),
            (
                "star",
                Box::new(|style| Box::new(Star::new(style))),
                Star::default_color(),
            ),
            (
                "cow",
                Box::new(|style| Box::new(Cow::new(style))),
                Cow::default_color(),
            ),
            (
                "goat",
                Box::new(|style| Box::new(Goat::new(style))),
                Goat::default_color(),
            ),
        ];
        for (name, ctor, color) in builtins {
            factory
                .register_with_style(name, ctor, ElementStyle::new(color))
                .expect("built-in elements have valid bounds");
        }
        factory
    }
}

#[cfg(test)]
mod tests {
    use rand::RngCore;

    use super::*;
    use crate::canvas::DrawSurface;
    use crate::geometry::Rect;

    struct Castle {
        style: ElementStyle,
    }

    impl SceneElement for Castle {
        fn draw(&self, surface: &mut dyn DrawSurface, position: Vec2, _rng: &mut dyn RngCore) {
            surface.fill_rect(self.bounds(position), self.style.fill());
        }

        fn bounds(&self, position: Vec2) -> Rect {
            Rect::new(position, position + Vec2::new(80.0, 60.0))
        }

        fn style(&self) -> &ElementStyle {
            &self.style
        }
    }

    struct Degenerate;

    impl SceneElement for Degenerate {
        fn draw(&self, _surface: &mut dyn DrawSurface, _position: Vec2, _rng: &mut dyn RngCore) {}

        fn bounds(&self, position: Vec2) -> Rect {
            Rect::new(position, position)
        }

        fn style(&self) -> &ElementStyle {
            unimplemented!("never styled")
        }
    }

    #[test]
    fn creates_all_builtin_types() {
        let factory = ElementFactory::default();
        for name in [
            "sun", "tree", "bird", "mountain", "river", "cloud", "star", "cow", "goat",
        ] {
            let element = factory.create(name).unwrap();
            assert!(!element.bounds(Vec2::new(100.0, 100.0)).is_degenerate());
        }
    }

    #[test]
    fn create_uses_the_type_default_style() {
        let factory = ElementFactory::default();

        let sun = factory.create("sun").unwrap();
        assert_eq!(sun.style().color, Sun::default_color());

        let cloud = factory.create("cloud").unwrap();
        assert_eq!(cloud.style().color, Color::WHITE);

        // An explicit style still wins over the registered default.
        let red = factory
            .create_with_style("sun", ElementStyle::new(Color::rgb(255, 0, 0)))
            .unwrap();
        assert_eq!(red.style().color, Color::rgb(255, 0, 0));
    }

    #[test]
    fn unknown_type_is_an_error() {
        let factory = ElementFactory::default();
        let err = factory.create("dragon").err().unwrap();
        assert!(matches!(err, Error::UnknownElementType { name } if name == "dragon"));
    }

    #[test]
    fn register_then_create_round_trip() {
        let mut factory = ElementFactory::default();
        factory
            .register("castle", Box::new(|style| Box::new(Castle { style })))
            .unwrap();

        let castle = factory.create("castle").unwrap();
        let bounds = castle.bounds(Vec2::new(10.0, 20.0));
        assert!(!bounds.is_degenerate());
        assert_eq!(bounds.min, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn register_rejects_degenerate_constructors() {
        let mut factory = ElementFactory::default();
        let before = factory.len();

        let err = factory
            .register("broken", Box::new(|_style| Box::new(Degenerate)))
            .unwrap_err();

        assert!(matches!(err, Error::InvalidElementType { name, .. } if name == "broken"));
        assert_eq!(factory.len(), before);
        assert!(!factory.contains("broken"));
    }

    #[test]
    fn register_overrides_existing_types() {
        let mut factory = ElementFactory::default();
        factory
            .register("sun", Box::new(|style| Box::new(Castle { style })))
            .unwrap();

        let replaced = factory.create("sun").unwrap();
        assert_eq!(replaced.bounds(Vec2::ZERO).max, Vec2::new(80.0, 60.0));
    }
}
