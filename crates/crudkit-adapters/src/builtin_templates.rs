//! Templates that ship with crudkit.
//!
//! Two files per resource, registered in this order:
//!
//! | name   | destination                                   |
//! |--------|-----------------------------------------------|
//! | `api`  | `api/{{ resource_name }}.{{ ext }}`           |
//! | `view` | `views/{{ resource_name }}/view.{{ ext }}`    |
//!
//! The API descriptor maps the five CRUD operations to fixed endpoints. The
//! view descriptor wires a collection view to that API. Both are emitted as
//! text for the `acribus` front-end library; nothing here interprets them.

use crudkit_core::domain::Template;

pub const API_TEMPLATE_NAME: &str = "api";
pub const API_TEMPLATE_PATH: &str = "api/{{ resource_name }}.{{ ext }}";
pub const API_TEMPLATE: &str = "\
// API descriptor for the '{{ resource_name }}' resource.
import { Api } from 'acribus'
import request from './request'

export default new Api(request, {
  list: '/api/list',
  one: '/api/one',
  add: '/api/add',
  update: '/api/update',
  delete: '/api/delete'
})
";

pub const VIEW_TEMPLATE_NAME: &str = "view";
pub const VIEW_TEMPLATE_PATH: &str = "views/{{ resource_name }}/view.{{ ext }}";
pub const VIEW_TEMPLATE: &str = "\
import { ViewFactory, MODE, CollectionDescriptor, constant, Schema, eventHub } from 'acribus'

import {{ resource_ident }} from '../../api/{{ resource_name }}'

export default ViewFactory({
  mode: MODE.EDIT_IN_DIALOG,
  data: new CollectionDescriptor('{{ resource_name }}'),
  schema: [],
  actions: [],
  hooks: [],
  options: {},
  nestedResource: [],
  parallelResource: []
})
";

/// The API descriptor: CRUD endpoints for one resource.
pub fn api_descriptor() -> Template {
    Template::new(API_TEMPLATE_NAME, API_TEMPLATE_PATH, API_TEMPLATE)
        .with_description("API descriptor mapping list/one/add/update/delete to endpoints")
}

/// The view descriptor: an edit-in-dialog collection view.
pub fn view_descriptor() -> Template {
    Template::new(VIEW_TEMPLATE_NAME, VIEW_TEMPLATE_PATH, VIEW_TEMPLATE)
        .with_description("Collection view bound to the resource's API descriptor")
}

/// All built-in templates, in generation order.
pub fn all_templates() -> Vec<Template> {
    vec![api_descriptor(), view_descriptor()]
}
