//! TypeScript writer for class descriptions.
//!
//! Namespaces are stripped rather than imported: the description model
//! carries no module layout, so emitted classes reference short names
//! only.

use crate::traits::Backend;
use polygen_model::{ClassDef, FieldDef, MethodDef, Visibility};
use polygen_typeexpr::{TypeNode, render_with};

/// Static instance of the TypeScript backend for the registry.
pub static TYPESCRIPT_BACKEND: TypeScriptBackend = TypeScriptBackend;

/// TypeScript backend implementing the Backend trait.
pub struct TypeScriptBackend;

impl Backend for TypeScriptBackend {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn language(&self) -> &'static str {
        "typescript"
    }

    fn extension(&self) -> &'static str {
        "ts"
    }

    fn generate(&self, class: &ClassDef) -> String {
        generate_typescript(class, &TypeScriptOptions::default())
    }
}

/// Options for TypeScript generation.
#[derive(Debug, Clone)]
pub struct TypeScriptOptions {
    /// Emit `export` on the class declaration.
    pub export: bool,
    /// Mark every field `readonly`, not just final ones.
    pub readonly: bool,
    /// Indentation unit.
    pub indent: String,
}

impl Default for TypeScriptOptions {
    fn default() -> Self {
        Self {
            export: true,
            readonly: false,
            indent: "  ".to_string(),
        }
    }
}

/// Generate a TypeScript class from a description.
pub fn generate_typescript(class: &ClassDef, options: &TypeScriptOptions) -> String {
    TypeScriptWriter::new(options).emit(class)
}

/// Well-known canonical names with TypeScript equivalents.
fn builtin(name: &str) -> Option<&'static str> {
    Some(match name {
        "java.lang.String" | "String" => "string",
        "java.lang.Integer" | "java.lang.Long" | "java.lang.Short" | "java.lang.Byte"
        | "java.lang.Double" | "java.lang.Float" | "int" | "long" | "short" | "byte"
        | "double" | "float" => "number",
        "java.lang.Boolean" | "boolean" => "boolean",
        "java.lang.Object" => "unknown",
        "java.util.List" | "java.util.Collection" => "Array",
        "java.util.Map" => "Map",
        "java.util.Set" => "Set",
        "java.util.Date" => "Date",
        "void" => "void",
        _ => return None,
    })
}

fn short_name(name: &str) -> String {
    if let Some(mapped) = builtin(name) {
        return mapped.to_string();
    }
    name.rsplit('.').next().unwrap_or(name).to_string()
}

fn visibility_keyword(visibility: Visibility) -> &'static str {
    match visibility {
        // Class members default to public; package visibility has no
        // TypeScript equivalent.
        Visibility::Public | Visibility::Package => "",
        Visibility::Protected => "protected ",
        Visibility::Private => "private ",
    }
}

fn type_text(ty: &TypeNode) -> String {
    render_with(ty, &short_name)
}

fn capitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Emits a class description as TypeScript source.
struct TypeScriptWriter<'a> {
    out: String,
    options: &'a TypeScriptOptions,
    needs_gap: bool,
}

impl<'a> TypeScriptWriter<'a> {
    fn new(options: &'a TypeScriptOptions) -> Self {
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
        if let Some(docs) = &class.docs {
            self.doc_comment(docs, 0);
        }

        if self.options.export {
            self.out.push_str("export ");
        }
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
        if field.is_final || self.options.readonly {
            self.out.push_str("readonly ");
        }
        self.out.push_str(&field.name);
        self.out.push_str(": ");
        self.out.push_str(&type_text(&field.ty));
        if let Some(args) = &field.ty.constructor_args {
            self.out.push_str(" = new ");
            self.out.push_str(&short_name(&field.ty.name));
            self.out.push('(');
            self.out.push_str(args);
            self.out.push(')');
        }
        self.out.push_str(";\n");
    }

    fn getter(&mut self, field: &FieldDef) {
        self.gap();
        self.indent(1);
        self.out.push_str("get");
        self.out.push_str(&capitalized(&field.name));
        self.out.push_str("(): ");
        self.out.push_str(&type_text(&field.ty));
        self.out.push_str(" {\n");
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
        self.out.push_str("set");
        self.out.push_str(&capitalized(&field.name));
        self.out.push('(');
        self.out.push_str(&field.name);
        self.out.push_str(": ");
        self.out.push_str(&type_text(&field.ty));
        self.out.push_str("): void {\n");
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
        self.out.push_str(&method.name);
        self.out.push('(');
        let params: Vec<String> = method
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, type_text(&p.ty)))
            .collect();
        self.out.push_str(&params.join(", "));
        self.out.push_str("): ");
        match &method.return_type {
            Some(ty) => self.out.push_str(&type_text(ty)),
            None => self.out.push_str("void"),
        }
        self.out.push_str(" {\n");
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
