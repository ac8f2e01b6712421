// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Encoding user-defined records through the capability traits

use scadgen::ast::{encode, Encode, Field, FunctionName, Layout, NameProvider};
use scadgen::compose::Composite;
use scadgen::primitives::Cube;
use scadgen::value::{Bool, Float, Int, Str};
use scadgen::{EncodeExt, Error};

/// A hand-written record with a renamed key and an optional name override
#[derive(Default)]
struct Gear {
    name: FunctionName,
    teeth: Int,
    module_size: Float,
    hub: Bool,
}

impl Encode for Gear {
    fn layout(&self) -> Layout<'_> {
        Layout::Record(vec![
            Field::name("Gear", &self.name),
            Field::parameter("Teeth", &self.teeth),
            Field::parameter("ModuleSize", &self.module_size).rename("mod"),
            Field::parameter("Hub", &self.hub),
        ])
    }
}

/// Name supplied by a custom provider
struct Labelled(&'static str);

impl NameProvider for Labelled {
    fn function_name(&self) -> &str {
        self.0
    }
}

struct Custom {
    label: Labelled,
    note: Str,
    parts: Vec<Composite>,
}

impl Encode for Custom {
    fn layout(&self) -> Layout<'_> {
        Layout::Record(vec![
            Field::name("Label", &self.label),
            Field::parameter("Note", &self.note),
            Field::children("Parts", &self.parts),
        ])
    }
}

#[test]
fn test_user_record() {
    let gear = Gear {
        teeth: Int::new(20),
        module_size: Float::new(1.5),
        ..Default::default()
    };

    let f = encode(&gear).unwrap();
    assert_eq!(f.name, "gear");
    assert_eq!(f.call(), "gear(mod=1.5, teeth=20)");
    assert!(f.children.is_empty());
}

#[test]
fn test_name_override_wins_over_key() {
    let gear = Gear {
        name: FunctionName::new("spur_gear"),
        hub: Bool::new(false),
        ..Default::default()
    };
    assert_eq!(encode(&gear).unwrap().call(), "spur_gear(hub=false)");
}

#[test]
fn test_custom_name_provider_and_children() {
    let custom = Custom {
        label: Labelled("assembly"),
        note: Str::default(),
        parts: vec![
            Cube::new(1.0, 1.0, 1.0).boxed(),
            Gear::default().boxed(),
        ],
    };

    let f = encode(&custom).unwrap();
    assert_eq!(f.call(), "assembly()");
    let names: Vec<&str> = f.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["cube", "gear"]);
}

#[test]
fn test_deep_child_error_keeps_kind_and_position() {
    struct Nameless;

    impl Encode for Nameless {
        fn layout(&self) -> Layout<'_> {
            Layout::Record(Vec::new())
        }
    }

    let inner = Custom {
        label: Labelled("inner"),
        note: Str::default(),
        parts: vec![Cube::new(1.0, 1.0, 1.0).boxed(), Nameless.boxed()],
    };
    let outer = Custom {
        label: Labelled("outer"),
        note: Str::from("x"),
        parts: vec![inner.boxed()],
    };

    let err = encode(&outer).unwrap_err();
    assert_eq!(err.child_path(), vec![0, 1]);
    assert!(matches!(err.root_cause(), Error::MissingNameField { .. }));
}

#[test]
fn test_absent_child_is_nil_record() {
    let custom = Custom {
        label: Labelled("maybe"),
        note: Str::default(),
        parts: vec![Box::new(None::<Cube>)],
    };

    let err = encode(&custom).unwrap_err();
    assert_eq!(err.root_cause(), &Error::NilRecord);
}

#[test]
fn test_scalar_child_is_not_a_record() {
    let custom = Custom {
        label: Labelled("scalar"),
        note: Str::default(),
        parts: vec![Box::new(Float::new(1.0))],
    };

    let err = encode(&custom).unwrap_err();
    assert!(matches!(err.root_cause(), Error::NotARecord { .. }));
}

#[test]
fn test_field_order_does_not_change_parameters() {
    struct Forward {
        a: Float,
        b: Float,
    }
    struct Backward {
        a: Float,
        b: Float,
    }

    impl Encode for Forward {
        fn layout(&self) -> Layout<'_> {
            Layout::Record(vec![
                Field::auto_name("Thing"),
                Field::parameter("A", &self.a),
                Field::parameter("B", &self.b),
            ])
        }
    }

    impl Encode for Backward {
        fn layout(&self) -> Layout<'_> {
            Layout::Record(vec![
                Field::parameter("B", &self.b),
                Field::parameter("A", &self.a),
                Field::auto_name("Thing"),
            ])
        }
    }

    let forward = encode(&Forward {
        a: Float::new(1.0),
        b: Float::new(2.0),
    })
    .unwrap();
    let backward = encode(&Backward {
        a: Float::new(1.0),
        b: Float::new(2.0),
    })
    .unwrap();

    assert_eq!(forward, backward);
    assert_eq!(forward.call(), "thing(a=1, b=2)");
}
