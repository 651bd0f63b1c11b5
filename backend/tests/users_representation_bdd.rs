//! Behaviour tests for the users collection representation.
//!
//! These scenarios exercise the public rendering contract: collection links
//! built from a request-scoped URL builder, source order preserved, and
//! rendered documents parsing back to the same users.

use std::sync::{Arc, Mutex};

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use url::Url;
use users_api::domain::representation::{
    ApiDocs, DefaultUsersRepresenter, RepresentationError, SerializationContext, UserRepresenter,
    UsersDocument, UsersRepresentationError,
};
use users_api::domain::{LoginName, User};
use users_api::inbound::http::url_builder::RequestUrlBuilder;

struct RepresentationWorld {
    context: SerializationContext,
    users: Vec<User>,
    rendered: Option<Result<UsersDocument, UsersRepresentationError>>,
    parsed: Option<Vec<User>>,
}

impl Default for RepresentationWorld {
    fn default() -> Self {
        Self {
            context: SerializationContext::new(ApiDocs::for_version("19.1.0")),
            users: Vec::new(),
            rendered: None,
            parsed: None,
        }
    }
}

impl RepresentationWorld {
    fn document(&self) -> &UsersDocument {
        match self.rendered.as_ref().expect("render outcome") {
            Ok(document) => document,
            Err(error) => panic!("expected render to succeed: {error}"),
        }
    }
}

fn representer() -> DefaultUsersRepresenter {
    DefaultUsersRepresenter::new(UserRepresenter)
}

fn split_names(names: &str) -> Vec<String> {
    names.split(',').map(|name| name.trim().to_owned()).collect()
}

fn login_names(users: &[User]) -> Vec<String> {
    users
        .iter()
        .map(|user| user.login_name().to_string())
        .collect()
}

#[fixture]
fn world() -> Mutex<RepresentationWorld> {
    Mutex::new(RepresentationWorld::default())
}

#[given("a URL builder rooted at {base}")]
fn a_url_builder_rooted_at(world: &Mutex<RepresentationWorld>, base: String) {
    let base = Url::parse(&base).expect("valid base URL");
    let builder = RequestUrlBuilder::new(base).expect("usable base URL");
    let mut world = world.lock().expect("world lock");
    world.context = world.context.clone().with_url_builder(Arc::new(builder));
}

#[given("no URL builder")]
fn no_url_builder(world: &Mutex<RepresentationWorld>) {
    let mut world = world.lock().expect("world lock");
    world.context = SerializationContext::new(ApiDocs::for_version("19.1.0"));
}

#[given("the users {names}")]
fn the_users(world: &Mutex<RepresentationWorld>, names: String) {
    let mut world = world.lock().expect("world lock");
    world.users = split_names(&names)
        .into_iter()
        .map(|name| User::new(LoginName::new(name).expect("valid login name")))
        .collect();
}

#[given("no users")]
fn no_users(world: &Mutex<RepresentationWorld>) {
    world.lock().expect("world lock").users.clear();
}

#[when("the users collection is rendered")]
fn the_users_collection_is_rendered(world: &Mutex<RepresentationWorld>) {
    let mut world = world.lock().expect("world lock");
    let outcome = representer().render(&world.users, &world.context);
    world.rendered = Some(outcome);
}

#[when("the rendered document is parsed")]
fn the_rendered_document_is_parsed(world: &Mutex<RepresentationWorld>) {
    let mut world = world.lock().expect("world lock");
    let document = serde_json::to_value(world.document()).expect("serialise document");
    let users = representer().parse(document).expect("parse document");
    world.parsed = Some(users);
}

#[then("the self link is {href}")]
fn the_self_link_is(world: &Mutex<RepresentationWorld>, href: String) {
    let world = world.lock().expect("world lock");
    assert_eq!(world.document().links.self_link.href, href);
}

#[then("the current user link is {href}")]
fn the_current_user_link_is(world: &Mutex<RepresentationWorld>, href: String) {
    let world = world.lock().expect("world lock");
    assert_eq!(world.document().links.current_user.href, href);
}

#[then("the doc link is {href}")]
fn the_doc_link_is(world: &Mutex<RepresentationWorld>, href: String) {
    let world = world.lock().expect("world lock");
    assert_eq!(world.document().links.doc.href, href);
}

#[then("the rendered login names are {names}")]
fn the_rendered_login_names_are(world: &Mutex<RepresentationWorld>, names: String) {
    let world = world.lock().expect("world lock");
    let rendered: Vec<String> = world
        .document()
        .users
        .iter()
        .map(|user| match &user["login_name"] {
            Value::String(name) => name.clone(),
            other => panic!("login_name should be a string, got {other}"),
        })
        .collect();
    assert_eq!(rendered, split_names(&names));
}

#[then("the rendered collection is empty")]
fn the_rendered_collection_is_empty(world: &Mutex<RepresentationWorld>) {
    let world = world.lock().expect("world lock");
    assert!(world.document().users.is_empty());
}

#[then("rendering fails because {key} is missing")]
fn rendering_fails_because_key_is_missing(world: &Mutex<RepresentationWorld>, key: String) {
    let world = world.lock().expect("world lock");
    match world.rendered.as_ref().expect("render outcome") {
        Err(RepresentationError::MissingContext { key: missing }) => assert_eq!(*missing, key),
        other => panic!("expected missing context, got {other:?}"),
    }
}

#[then("the parsed login names are {names}")]
fn the_parsed_login_names_are(world: &Mutex<RepresentationWorld>, names: String) {
    let world = world.lock().expect("world lock");
    let parsed = world.parsed.as_deref().expect("parsed users");
    assert_eq!(login_names(parsed), split_names(&names));
}

#[scenario(
    path = "tests/features/users_representation.feature",
    name = "Users render in source order with collection links"
)]
fn users_render_in_source_order(world: Mutex<RepresentationWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/users_representation.feature",
    name = "An empty collection still carries its links"
)]
fn empty_collection_carries_links(world: Mutex<RepresentationWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/users_representation.feature",
    name = "Rendering without a URL builder reports the missing context"
)]
fn rendering_without_url_builder_fails(world: Mutex<RepresentationWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/users_representation.feature",
    name = "A rendered collection parses back to the same users"
)]
fn rendered_collection_parses_back(world: Mutex<RepresentationWorld>) {
    drop(world);
}
