//! Java writer for class descriptions.

use crate::imports::{ImportPolicy, aggregate};
use crate::traits::Backend;
use polygen_model::{ClassDef, FieldDef, MethodDef, Visibility};
use polygen_typeexpr::{TypeNode, collect_references, render_with};

/// Static instance of the Java backend for the registry.
pub static JAVA_BACKEND: JavaBackend = JavaBackend;

/// Java backend implementing the Backend trait.
pub struct JavaBackend;

impl Backend for JavaBackend {
    fn name(&self) -> &'static str {
        "java"
    }

    fn language(&self) -> &'static str {
        "java"
    }

    fn extension(&self) -> &'static str {
        "java"
    }

    fn generate(&self, class: &ClassDef) -> String {
        generate_java(class, &JavaOptions::default())
    }
}

/// Options for Java generation.
#[derive(Debug, Clone)]
pub struct JavaOptions {
    /// Indentation unit.
    pub indent: String,
}

impl Default for JavaOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
        }
    }
}

/// Generate a Java class from a description.
pub fn generate_java(class: &ClassDef, options: &JavaOptions) -> String {
    JavaWriter::new(options).emit(class)
}

/// A dotted name whose final segment is capitalized, i.e. something an
/// import statement can name.
fn is_canonical(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, last)) => last.chars().next().is_some_and(|c| c.is_ascii_uppercase()),
        None => false,
    }
}

/// Strip the package prefix from canonical names; everything else passes
/// through verbatim (the imports block makes short names resolvable).
fn short_name(name: &str) -> String {
    if is_canonical(name) {
        name.rsplit('.').next().unwrap_or(name).to_string()
    } else {
        name.to_string()
    }
}

fn visibility_keyword(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Public => "public ",
        Visibility::Protected => "protected ",
        // Package visibility is Java's bare default.
        Visibility::Package => "",
        Visibility::Private => "private ",
    }
}

/// Declared type text: the rendered tree, with the raw generics
/// annotation as fallback for caller-built nodes that carry raw text and
/// no parsed children.
fn type_text(ty: &TypeNode) -> String {
    let mut text = render_with(ty, &short_name);
    if ty.generics.is_empty() {
        if let Some(raw) = &ty.raw_generics {
            text.push('<');
            text.push_str(raw);
            text.push('>');
        }
    }
    text
}

fn capitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Emits a class description as Java source.
struct JavaWriter<'a> {
    out: String,
    options: &'a JavaOptions,
    /// Whether the next member block needs a separating blank line.
    needs_gap: bool,
}

impl<'a> JavaWriter<'a> {
    fn new(options: &'a JavaOptions) -> Self {
        Self {
            out: String::new(),
            options,
            needs_gap: false,
        }
    }

    fn indent(&mut self, level: usize) {
        for _ in 0..level {
            self.out.push_str(&self.options.indent);
        }
    }

    fn gap(&mut self) {
        if self.needs_gap {
            self.out.push('\n');
        }
        self.needs_gap = true;
    }

    fn doc_comment(&mut self, docs: &str, level: usize) {
        if docs.contains('\n') {
            self.indent(level);
            self.out.push_str("/**\n");
            for line in docs.lines() {
                self.indent(level);
                self.out.push_str(" * ");
                self.out.push_str(line);
                self.out.push('\n');
            }
            self.indent(level);
            self.out.push_str(" */\n");
        } else {
            self.indent(level);
            self.out.push_str("/** ");
            self.out.push_str(docs);
            self.out.push_str(" */\n");
        }
    }

    fn emit(mut self, class: &ClassDef) -> String {
        if let Some(package) = &class.package {
            self.out.push_str("package ");
            self.out.push_str(package);
            self.out.push_str(";\n\n");
        }

        let imports = class_imports(class);
        if !imports.is_empty() {
            for import in &imports {
                self.out.push_str("import ");
                self.out.push_str(import);
                self.out.push_str(";\n");
            }
            self.out.push('\n');
        }

        if let Some(docs) = &class.docs {
            self.doc_comment(docs, 0);
        }

        self.out.push_str(visibility_keyword(class.visibility));
        if class.is_abstract {
            self.out.push_str("abstract ");
        }
        self.out.push_str("class ");
        self.out.push_str(&class.name);
        if let Some(superclass) = &class.extends {
            self.out.push_str(" extends ");
            self.out.push_str(&type_text(superclass));
        }
        if !class.implements.is_empty() {
            self.out.push_str(" implements ");
            let interfaces: Vec<String> = class.implements.iter().map(type_text).collect();
            self.out.push_str(&interfaces.join(", "));
        }
        self.out.push_str(" {\n");

        for field in &class.fields {
            self.field(field);
            self.needs_gap = true;
        }

        for field in class.fields.iter().filter(|f| f.accessors) {
            self.getter(field);
            if !field.is_final {
                self.setter(field);
            }
        }

        for method in &class.methods {
            self.method(method);
        }

        self.out.push_str("}\n");
        self.out
    }

    fn field(&mut self, field: &FieldDef) {
        if let Some(docs) = &field.docs {
            self.doc_comment(docs, 1);
        }
        self.indent(1);
        self.out.push_str(visibility_keyword(field.visibility));
        if field.is_static {
            self.out.push_str("static ");
        }
        if field.is_final {
            self.out.push_str("final ");
        }
        self.out.push_str(&type_text(&field.ty));
        self.out.push(' ');
        self.out.push_str(&field.name);
        if let Some(args) = &field.ty.constructor_args {
            self.out.push_str(" = new ");
            self.out.push_str(&short_name(&field.ty.name));
            if !field.ty.generics.is_empty() {
                self.out.push_str("<>");
            }
            self.out.push('(');
            self.out.push_str(args);
            self.out.push(')');
        }
        self.out.push_str(";\n");
    }

    fn getter(&mut self, field: &FieldDef) {
        self.gap();
        self.indent(1);
        self.out.push_str("public ");
        self.out.push_str(&type_text(&field.ty));
        self.out.push_str(" get");
        self.out.push_str(&capitalized(&field.name));
        self.out.push_str("() {\n");
        self.indent(2);
        self.out.push_str("return this.");
        self.out.push_str(&field.name);
        self.out.push_str(";\n");
        self.indent(1);
        self.out.push_str("}\n");
    }

    fn setter(&mut self, field: &FieldDef) {
        self.gap();
        self.indent(1);
        self.out.push_str("public void set");
        self.out.push_str(&capitalized(&field.name));
        self.out.push('(');
        self.out.push_str(&type_text(&field.ty));
        self.out.push(' ');
        self.out.push_str(&field.name);
        self.out.push_str(") {\n");
        self.indent(2);
        self.out.push_str("this.");
        self.out.push_str(&field.name);
        self.out.push_str(" = ");
        self.out.push_str(&field.name);
        self.out.push_str(";\n");
        self.indent(1);
        self.out.push_str("}\n");
    }

    fn method(&mut self, method: &MethodDef) {
        self.gap();
        if let Some(docs) = &method.docs {
            self.doc_comment(docs, 1);
        }
        self.indent(1);
        self.out.push_str(visibility_keyword(method.visibility));
        if method.is_static {
            self.out.push_str("static ");
        }
        match &method.return_type {
            Some(ty) => self.out.push_str(&type_text(ty)),
            None => self.out.push_str("void"),
        }
        self.out.push(' ');
        self.out.push_str(&method.name);
        self.out.push('(');
        let params: Vec<String> = method
            .params
            .iter()
            .map(|p| format!("{} {}", type_text(&p.ty), p.name))
            .collect();
        self.out.push_str(&params.join(", "));
        self.out.push_str(") {\n");
        if let Some(body) = &method.body {
            for line in body.lines() {
                self.indent(2);
                self.out.push_str(line);
                self.out.push('\n');
            }
        }
        self.indent(1);
        self.out.push_str("}\n");
    }
}

fn class_imports(class: &ClassDef) -> Vec<String> {
    let mut names = Vec::new();
    {
        let mut add = |ty: &TypeNode| names.extend(collect_references(ty, &is_canonical));
        if let Some(superclass) = &class.extends {
            add(superclass);
        }
        for interface in &class.implements {
            add(interface);
        }
        for field in &class.fields {
            add(&field.ty);
        }
        for method in &class.methods {
            if let Some(ty) = &method.return_type {
                add(ty);
            }
            for param in &method.params {
                add(&param.ty);
            }
        }
    }

    let mut policy = ImportPolicy::new().with_implicit_prefix("java.lang");
    if let Some(package) = &class.package {
        policy = policy.for_package(package.clone());
    }
    aggregate(names, &policy)
}
