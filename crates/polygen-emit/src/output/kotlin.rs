//! Kotlin writer for class descriptions.
//!
//! Properties subsume the accessor boilerplate other targets generate,
//! so the `accessors` flag adds nothing here; static methods land in a
//! companion object.

use crate::imports::{ImportPolicy, aggregate};
use crate::traits::Backend;
use polygen_model::{ClassDef, FieldDef, MethodDef, Visibility};
use polygen_typeexpr::{TypeNode, collect_references, render_with};

/// Static instance of the Kotlin backend for the registry.
pub static KOTLIN_BACKEND: KotlinBackend = KotlinBackend;

/// Kotlin backend implementing the Backend trait.
pub struct KotlinBackend;

impl Backend for KotlinBackend {
    fn name(&self) -> &'static str {
        "kotlin"
    }

    fn language(&self) -> &'static str {
        "kotlin"
    }

    fn extension(&self) -> &'static str {
        "kt"
    }

    fn generate(&self, class: &ClassDef) -> String {
        generate_kotlin(class, &KotlinOptions::default())
    }
}

/// Options for Kotlin generation.
#[derive(Debug, Clone)]
pub struct KotlinOptions {
    /// Indentation unit.
    pub indent: String,
}

impl Default for KotlinOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
        }
    }
}

/// Generate a Kotlin class from a description.
pub fn generate_kotlin(class: &ClassDef, options: &KotlinOptions) -> String {
    KotlinWriter::new(options).emit(class)
}

/// Well-known canonical names with Kotlin builtin equivalents; these
/// never appear in the import block.
fn builtin(name: &str) -> Option<&'static str> {
    Some(match name {
        "java.lang.String" | "String" => "String",
        "java.lang.Integer" | "int" => "Int",
        "java.lang.Long" | "long" => "Long",
        "java.lang.Short" | "short" => "Short",
        "java.lang.Byte" | "byte" => "Byte",
        "java.lang.Double" | "double" => "Double",
        "java.lang.Float" | "float" => "Float",
        "java.lang.Boolean" | "boolean" => "Boolean",
        "java.lang.Character" | "char" => "Char",
        "java.lang.Object" => "Any",
        "java.util.List" => "List",
        "java.util.Map" => "Map",
        "java.util.Set" => "Set",
        "void" => "Unit",
        _ => return None,
    })
}

fn is_canonical(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, last)) => last.chars().next().is_some_and(|c| c.is_ascii_uppercase()),
        None => false,
    }
}

fn short_name(name: &str) -> String {
    if let Some(mapped) = builtin(name) {
        return mapped.to_string();
    }
    if is_canonical(name) {
        name.rsplit('.').next().unwrap_or(name).to_string()
    } else {
        name.to_string()
    }
}

fn visibility_keyword(visibility: Visibility) -> &'static str {
    match visibility {
        // Public is Kotlin's bare default.
        Visibility::Public => "",
        Visibility::Protected => "protected ",
        Visibility::Package => "internal ",
        Visibility::Private => "private ",
    }
}

fn type_text(ty: &TypeNode) -> String {
    render_with(ty, &short_name)
}

/// Emits a class description as Kotlin source.
struct KotlinWriter<'a> {
    out: String,
    options: &'a KotlinOptions,
    needs_gap: bool,
}

impl<'a> KotlinWriter<'a> {
    fn new(options: &'a KotlinOptions) -> Self {
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
            self.out.push_str("\n\n");
        }

        let imports = class_imports(class);
        if !imports.is_empty() {
            for import in &imports {
                self.out.push_str("import ");
                self.out.push_str(import);
                self.out.push('\n');
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

        let mut supertypes = Vec::new();
        if let Some(superclass) = &class.extends {
            supertypes.push(format!("{}()", type_text(superclass)));
        }
        for interface in &class.implements {
            supertypes.push(type_text(interface));
        }
        if !supertypes.is_empty() {
            self.out.push_str(" : ");
            self.out.push_str(&supertypes.join(", "));
        }
        self.out.push_str(" {\n");

        for field in &class.fields {
            self.property(field);
            self.needs_gap = true;
        }

        let (statics, members): (Vec<&MethodDef>, Vec<&MethodDef>) =
            class.methods.iter().partition(|m| m.is_static);

        for method in members {
            self.method(method, 1);
        }

        if !statics.is_empty() {
            self.gap();
            self.indent(1);
            self.out.push_str("companion object {\n");
            let mut first = true;
            for method in statics {
                if !first {
                    self.out.push('\n');
                }
                first = false;
                self.method(method, 2);
            }
            self.indent(1);
            self.out.push_str("}\n");
        }

        self.out.push_str("}\n");
        self.out
    }

    fn property(&mut self, field: &FieldDef) {
        if let Some(docs) = &field.docs {
            self.doc_comment(docs, 1);
        }
        self.indent(1);
        self.out.push_str(visibility_keyword(field.visibility));
        self.out.push_str(if field.is_final { "val " } else { "var " });
        self.out.push_str(&field.name);
        self.out.push_str(": ");
        self.out.push_str(&type_text(&field.ty));
        if let Some(args) = &field.ty.constructor_args {
            self.out.push_str(" = ");
            self.out.push_str(&short_name(&field.ty.name));
            self.out.push('(');
            self.out.push_str(args);
            self.out.push(')');
        } else if !field.is_final {
            self.out.push_str("? = null");
        }
        self.out.push('\n');
    }

    fn method(&mut self, method: &MethodDef, level: usize) {
        if level == 1 {
            self.gap();
        }
        if let Some(docs) = &method.docs {
            self.doc_comment(docs, level);
        }
        self.indent(level);
        self.out.push_str(visibility_keyword(method.visibility));
        self.out.push_str("fun ");
        self.out.push_str(&method.name);
        self.out.push('(');
        let params: Vec<String> = method
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, type_text(&p.ty)))
            .collect();
        self.out.push_str(&params.join(", "));
        self.out.push(')');
        if let Some(ty) = &method.return_type {
            self.out.push_str(": ");
            self.out.push_str(&type_text(ty));
        }
        self.out.push_str(" {\n");
        if let Some(body) = &method.body {
            for line in body.lines() {
                self.indent(level + 1);
                self.out.push_str(line);
                self.out.push('\n');
            }
        }
        self.indent(level);
        self.out.push_str("}\n");
    }
}

fn class_imports(class: &ClassDef) -> Vec<String> {
    let mut names = Vec::new();
    {
        let mut add = |ty: &TypeNode| {
            names.extend(
                collect_references(ty, &is_canonical)
                    .into_iter()
                    .filter(|n| builtin(n).is_none()),
            );
        };
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

    let mut policy = ImportPolicy::new()
        .with_implicit_prefix("java.lang")
        .with_implicit_prefix("kotlin")
        .with_implicit_prefix("kotlin.collections");
    if let Some(package) = &class.package {
        policy = policy.for_package(package.clone());
    }
    aggregate(names, &policy)
}
