/// Tests for AssetFactory

use super::*;
use crate::asset::LoadContext;

#[derive(Debug, Default, PartialEq)]
struct Palette {
    colors: Vec<u32>,
}

impl Asset for Palette {
    fn load(&mut self, _ctx: &LoadContext<'_>) -> Result<()> {
        Ok(())
    }
}

struct Sealed {
    marker: u8,
}

impl Sealed {
    fn unloaded() -> Self {
        Self { marker: 7 }
    }
}

impl Asset for Sealed {
    fn load(&mut self, _ctx: &LoadContext<'_>) -> Result<()> {
        Ok(())
    }
}

#[test]
fn test_factory_new_is_empty() {
    let factory = AssetFactory::new();
    assert!(factory.is_empty());
    assert!(!factory.is_registered::<Palette>());
}

#[test]
fn test_construct_unregistered_type_fails() {
    let factory = AssetFactory::new();
    let result = factory.construct::<Palette>();

    match result {
        Err(Error::ConstructionFailed(msg)) => assert!(msg.contains("Palette")),
        Err(other) => panic!("unexpected error: {:?}", other),
        Ok(_) => panic!("construction should fail"),
    }
}

#[test]
fn test_register_default_constructor() {
    let mut factory = AssetFactory::new();
    factory.register_default::<Palette>();

    assert!(factory.is_registered::<Palette>());
    assert_eq!(factory.construct::<Palette>().unwrap(), Palette::default());
}

#[test]
fn test_register_private_constructor() {
    let mut factory = AssetFactory::new();
    factory.register(Sealed::unloaded);

    let sealed = factory.construct::<Sealed>().unwrap();
    assert_eq!(sealed.marker, 7);
}

#[test]
fn test_each_construct_is_fresh() {
    let mut factory = AssetFactory::new();
    factory.register(|| Palette { colors: vec![1, 2, 3] });

    let mut first = factory.construct::<Palette>().unwrap();
    first.colors.push(4);
    let second = factory.construct::<Palette>().unwrap();

    assert_eq!(second.colors, vec![1, 2, 3]);
}

#[test]
fn test_register_twice_replaces() {
    let mut factory = AssetFactory::new();
    factory.register(|| Palette { colors: vec![1] });
    factory.register(|| Palette { colors: vec![2] });

    assert_eq!(factory.len(), 1);
    assert_eq!(factory.construct::<Palette>().unwrap().colors, vec![2]);
}

#[test]
fn test_type_names_sorted() {
    let mut factory = AssetFactory::new();
    factory.register(Sealed::unloaded);
    factory.register_default::<Palette>();

    let names = factory.type_names();
    assert_eq!(names.len(), 2);
    assert!(names[0] <= names[1]);
}
