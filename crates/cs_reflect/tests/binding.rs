//! Binding flag values into derived structs, the way a flag parser does.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use cs_reflect::access::{self, Target};
use cs_reflect::derive::Reflect;
use cs_reflect::info::{ReflectKind, TypePath, Typed, Visibility};
use cs_reflect::ops::Struct;
use cs_reflect::tags::{self, TagShape};
use cs_reflect::{AccessError, Reflect};

#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Opaque)]
struct Port(u16);

#[derive(Reflect)]
struct Listen {
    #[reflect(tag(flag = "host", usage = "  address to bind  "))]
    pub host: String,
    #[reflect(tag(flag = "port", alias = "['p', 'P']"))]
    pub port: Port,
}

#[derive(Reflect)]
#[reflect(type_path = "demo::Server")]
struct Server {
    pub listen: Option<Box<Listen>>,
    #[reflect(tag(alias = "[v, 'verbose', 'loud]"))]
    pub verbose: bool,
    pub labels: Vec<String>,
    pub env: BTreeMap<String, String>,
    #[reflect(hidden)]
    pub token: String,
    #[reflect(export)]
    retries: u8,
    #[reflect(ignore)]
    pub cache: Vec<u8>,
    workers: usize,
}

impl Server {
    fn new() -> Self {
        Self {
            listen: None,
            verbose: false,
            labels: Vec::new(),
            env: BTreeMap::new(),
            token: String::new(),
            retries: 0,
            cache: Vec::new(),
            workers: 1,
        }
    }
}

#[derive(Reflect)]
struct Pair<T> {
    pub left: T,
    pub right: Option<T>,
    #[reflect(ignore)]
    pub marker: PhantomData<fn() -> T>,
}

#[derive(Reflect)]
struct Marker;

#[test]
fn exported_fields_read_back() {
    let mut server = Server::new();
    server.verbose = true;

    let field = access::get_struct_field(&mut server, "verbose").unwrap();
    assert_eq!(field.downcast_ref::<bool>(), Some(&true));

    let field = access::get_struct_field(&mut server, "retries").unwrap();
    assert_eq!(field.downcast_ref::<u8>(), Some(&0));
}

#[test]
fn written_values_read_back() {
    let mut server = Server::new();

    access::set_struct_field(&mut server, "labels", vec![String::from("a")]).unwrap();
    access::set_struct_field(&mut server, "retries", 3_u8).unwrap();
    assert_eq!(server.labels, ["a"]);
    assert_eq!(server.retries, 3);

    let mut env = BTreeMap::new();
    env.insert(String::from("RUST_LOG"), String::from("debug"));
    access::set_struct_field_boxed(&mut server, "env", Box::new(env.clone())).unwrap();

    let field = access::get_struct_field(&mut server, "env").unwrap();
    assert_eq!(field.downcast_ref::<BTreeMap<String, String>>(), Some(&env));
}

#[test]
fn unreachable_fields_are_invalid() {
    let mut server = Server::new();

    for name in ["workers", "token", "cache", "missing", ""] {
        let err = access::get_struct_field(&mut server, name).unwrap_err();
        assert_eq!(
            err,
            AccessError::InvalidField {
                type_name: "Server".into(),
                field: name.into(),
            },
        );
    }
    assert_eq!(server.workers, 1);
}

#[test]
fn mismatched_values_leave_the_field_untouched() {
    let mut server = Server::new();
    server.retries = 2;

    let err = access::set_struct_field(&mut server, "retries", 5_u32).unwrap_err();
    assert_eq!(
        err,
        AccessError::TypeMismatch {
            expected: "u8".into(),
            actual: "u32".into(),
        },
    );
    assert_eq!(server.retries, 2);

    let err = access::set_struct_field(&mut server, "labels", vec!["a"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "type mismatch: expected `Vec<String>`, found `Vec<&str>`",
    );
}

#[test]
fn pointers_are_followed() {
    let mut server = Box::new(Server::new());
    access::set_struct_field(&mut server, "verbose", true).unwrap();
    assert!(server.verbose);

    let mut listen = Some(Box::new(Listen {
        host: String::from("localhost"),
        port: Port(80),
    }));
    access::set_struct_field(&mut listen, "port", Port(8080)).unwrap();
    access::set_struct_field(&mut listen, "host", String::from("0.0.0.0")).unwrap();

    let listen = listen.unwrap();
    assert_eq!(listen.port, Port(8080));
    assert_eq!(listen.host, "0.0.0.0");

    // a null pointer has no field
    let mut none: Option<Box<Listen>> = None;
    let err = access::get_struct_field(&mut none, "host").unwrap_err();
    assert!(matches!(err, AccessError::InvalidField { .. }));
}

#[test]
fn nested_structs_bind_through_options() {
    let mut server = Server::new();
    access::set_struct_field(
        &mut server,
        "listen",
        Some(Box::new(Listen {
            host: String::new(),
            port: Port(0),
        })),
    )
    .unwrap();

    let listen = access::get_struct_field(&mut server, "listen").unwrap();
    access::set_struct_field(listen, "port", Port(22)).unwrap();

    assert_eq!(server.listen.as_ref().map(|l| l.port), Some(Port(22)));
}

#[test]
fn shared_targets_are_rejected() {
    let mut server = Server::new();

    let err = access::get_struct_field(&server, "verbose").unwrap_err();
    assert!(matches!(err, AccessError::InvalidField { .. }));

    let err = access::check_value(&Target::from(&server)).unwrap_err();
    assert_eq!(
        err,
        AccessError::PointerRequired {
            type_name: "Server".into(),
        },
    );
    assert!(access::check_value(&Target::from(&mut server)).is_ok());
}

#[test]
fn only_structs_pass_the_shape_check() {
    let server = Server::new();
    assert!(access::should_be_struct(&server).is_ok());

    let cases: [(&dyn Reflect, ReflectKind); 5] = [
        (&1_i32, ReflectKind::Opaque),
        (&Port(1), ReflectKind::Opaque),
        (&Marker, ReflectKind::Opaque),
        (&BTreeMap::<u8, u8>::new(), ReflectKind::Map),
        (&Some(Box::new(Server::new())), ReflectKind::Pointer),
    ];
    for (value, actual) in cases {
        assert_eq!(
            access::should_be_struct(value),
            Err(AccessError::InvalidKind {
                expected: ReflectKind::Struct,
                actual,
            }),
        );
    }

    // after resolving the pointers, it is a struct again
    let boxed = Some(Box::new(Server::new()));
    let inner = access::indirect_value(&boxed).unwrap();
    assert!(access::should_be_struct(inner).is_ok());
}

#[test]
fn indirection_stops_at_the_value() {
    let value = Box::new(Some(Box::new(5_u16)));
    let inner = access::indirect_value(&value).unwrap();
    assert_eq!(inner.downcast_ref::<u16>(), Some(&5));

    // already resolved
    let again = access::indirect_value(inner).unwrap();
    assert_eq!(again.downcast_ref::<u16>(), Some(&5));

    let info = access::indirect_type(<Option<Box<Listen>>>::type_info());
    assert!(info.type_is::<Listen>());
    assert_eq!(info.kind(), ReflectKind::Struct);

    let info = access::indirect_type(<[Vec<Port>; 2]>::type_info());
    assert!(info.type_is::<Port>());
}

#[test]
fn derived_descriptors() {
    let info = Server::type_info();
    let info = info.as_struct().unwrap();

    assert_eq!(Server::type_path(), "demo::Server");
    assert_eq!(info.type_name(), "Server");
    assert_eq!(
        info.field_names().collect::<Vec<_>>(),
        ["listen", "verbose", "labels", "env", "token", "retries", "workers"],
    );

    let exported: Vec<_> = info
        .iter()
        .filter(|field| access::is_struct_field_exported(field))
        .map(|field| field.name())
        .collect();
    assert_eq!(exported, ["listen", "verbose", "labels", "env", "retries"]);

    let token = info.field("token").unwrap();
    assert_eq!(token.visibility(), Visibility::Private);
    assert!(token.type_is::<String>());
    assert!(info.field("cache").is_none());
}

#[test]
fn struct_views() {
    let mut server = Server::new();
    assert_eq!(server.field_len(), 7);
    assert_eq!(server.name_at(6), Some("workers"));
    assert!(server.name_at(7).is_none());

    *server.field_at_mut(1).unwrap().downcast_mut::<bool>().unwrap() = true;
    assert!(server.verbose);

    let kinds: Vec<_> = server.iter_fields().map(|v| v.reflect_kind()).collect();
    assert_eq!(
        kinds,
        [
            ReflectKind::Pointer,
            ReflectKind::Opaque,
            ReflectKind::List,
            ReflectKind::Map,
            ReflectKind::Opaque,
            ReflectKind::Opaque,
            ReflectKind::Opaque,
        ],
    );
}

#[test]
fn generic_structs() {
    let mut pair = Pair {
        left: 1_i64,
        right: None,
        marker: PhantomData,
    };

    access::set_struct_field(&mut pair, "right", Some(2_i64)).unwrap();
    assert_eq!(pair.right, Some(2));

    let err = access::set_struct_field(&mut pair, "left", 1_i32).unwrap_err();
    assert!(matches!(err, AccessError::TypeMismatch { .. }));
    assert!(access::get_struct_field(&mut pair, "marker").is_err());

    assert_eq!(access::type_name(&pair), "Pair<i64>");
    assert_eq!(<Pair<String>>::type_info().as_struct().unwrap().field_len(), 2);
}

#[test]
fn opaque_values() {
    let mut port = Port(1);
    assert!(port.set(Port(2).into_boxed_reflect()).is_ok());
    assert!(port.set(2_u16.into_boxed_reflect()).is_err());
    assert_eq!(port, Port(2));

    assert_eq!(format!("{:?}", port.as_reflect()), "Port(2)");
    assert_eq!(Marker::type_info().kind(), ReflectKind::Opaque);
}

#[test]
fn debug_output() {
    let listen = Listen {
        host: String::from("h"),
        port: Port(1),
    };
    let text = format!("{:?}", listen.as_reflect());
    assert!(text.contains("host: \"h\""));
    assert!(text.contains("port: Port(1)"));
}

#[test]
fn field_tags() {
    let info = Server::type_info();
    let info = info.as_struct().unwrap();
    let verbose = info.field("verbose").unwrap();

    // the unmatched quote of `'loud` is only stripped on its side
    assert_eq!(
        tags::get_struct_field_tag_slice(verbose, "alias"),
        ["v", "verbose", "loud"],
    );
    assert_eq!(tags::get_struct_field_tag(verbose, "flag"), "");
    assert!(tags::get_struct_field_tag_slice(verbose, "flag").is_empty());

    let info = Listen::type_info();
    let info = info.as_struct().unwrap();
    let host = info.field("host").unwrap();
    let port = info.field("port").unwrap();

    assert_eq!(tags::get_struct_field_tag(host, "usage"), "address to bind");
    assert_eq!(tags::get_struct_field_tag_slice(host, "flag"), ["host"]);
    assert_eq!(tags::get_struct_field_tag_slice(port, "alias"), ["p", "P"]);
    assert_eq!(port.tags().len(), 2);
}

#[test]
fn tag_grammar() {
    let parse = |text| tags::TagList::parse(text).collect::<Vec<_>>();

    assert_eq!(parse("[foo, bar, baz]"), ["foo", "bar", "baz"]);
    assert_eq!(parse("single"), ["single"]);
    assert!(parse("").is_empty());
    assert_eq!(parse("  spaced  "), ["spaced"]);

    // quotes do not protect commas
    assert_eq!(parse("['a','b,c']"), ["a", "b", "c"]);
    assert_eq!(tags::TagList::parse("['a','b,c']").shape(), TagShape::Bracketed);
}
