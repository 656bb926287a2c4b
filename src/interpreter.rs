use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use crate::class::Class;
use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::expr::{Expr, ExprVisitor};
use crate::function::{Function, NativeFunction};
use crate::literal::Literal;
use crate::object::{Callable, Object};
use crate::stmt::{Stmt, StmtVisitor};
use crate::token::{Token, Type};

/// The non-local control-flow signals a statement can raise instead of
/// running its successor: a `return` unwinds to the enclosing call, a
/// `break` unwinds to the enclosing loop, and a runtime error unwinds all
/// the way out to the driver. Ordinary statement execution stays on the
/// `Ok(())` path.
#[derive(Debug)]
pub enum Unwind {
    Return(Object),
    Break,
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Unwind::Error(error)
    }
}

/// Walks the AST produced by the parser, evaluating expressions and
/// executing statements directly rather than compiling to bytecode.
pub struct Interpreter {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<Token, usize>,
    stdout: Rc<RefCell<dyn Write>>,
}

impl Interpreter {
    pub fn new(stdout: Rc<RefCell<dyn Write>>) -> Self {
        let globals = Rc::new(RefCell::new(Environment::default()));

        for native in NativeFunction::get_globals() {
            let name = native.name.lexeme.clone();
            globals.borrow_mut().define(&name, Object::from(native));
        }

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
            stdout,
        }
    }

    /// Records how many scopes out a variable reference resolves to, so
    /// later lookups skip the walk up `Environment::enclosing` that a
    /// global or truly-unresolved name would otherwise need.
    pub fn resolve(&mut self, name: &Token, depth: usize) {
        self.locals.insert(name.clone(), depth);
    }

    /// Executes a full program. The only error that can escape the top
    /// level is a runtime error: the resolver rejects `return` and `break`
    /// outside of a function or loop before interpretation ever begins.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            if let Err(unwind) = self.execute(statement) {
                return match unwind {
                    Unwind::Error(error) => Err(error),
                    Unwind::Return(_) | Unwind::Break => {
                        unreachable!("resolver guarantees return/break never reach top-level code")
                    }
                };
            }
        }

        Ok(())
    }

    fn execute(&mut self, stmt: &Stmt) -> Result<(), Unwind> {
        stmt.accept(self)
    }

    fn evaluate(&mut self, expr: &Expr) -> Result<Object, RuntimeError> {
        expr.accept(self)
    }

    /// Runs `statements` in a fresh child scope, restoring the previous
    /// environment afterward no matter how execution ends: normal
    /// completion, a `break`/`return` unwind, or a runtime error.
    pub fn execute_block(&mut self, statements: &[Stmt], environment: Rc<RefCell<Environment>>) -> Result<(), Unwind> {
        let previous = std::mem::replace(&mut self.environment, environment);

        let result = statements.iter().try_for_each(|stmt| self.execute(stmt));

        self.environment = previous;
        result
    }

    fn look_up_variable(&mut self, name: &Token) -> Result<Object, RuntimeError> {
        match self.locals.get(name) {
            Some(&distance) => self.environment.borrow().get_at(distance, name),
            None => self.globals.borrow().get(name),
        }
    }

    fn check_arity(&self, paren: &Token, expected: usize, got: usize) -> Result<(), RuntimeError> {
        if expected != got {
            Err(RuntimeError {
                token: paren.clone(),
                message: format!("Expected {expected} arguments but got {got}."),
            })
        } else {
            Ok(())
        }
    }

    fn compare(&self, left: &Object, right: &Object, operator: &Token, holds: impl Fn(Ordering) -> bool) -> Result<Object, RuntimeError> {
        match left.partial_cmp(right) {
            Some(ordering) => Ok(Object::from(holds(ordering))),
            None => Err(RuntimeError {
                token: operator.clone(),
                message: "Operands must be numbers.".to_string(),
            }),
        }
    }
}

impl ExprVisitor<Result<Object, RuntimeError>> for Interpreter {
    fn visit_literal_expr(&mut self, expr: &Expr) -> Result<Object, RuntimeError> {
        let Expr::Literal(literal) = expr else { unreachable!() };
        Ok(Object::from(literal.clone()))
    }

    fn visit_logical_expr(&mut self, expr: &Expr) -> Result<Object, RuntimeError> {
        let Expr::Logical(data) = expr else { unreachable!() };
        let left = self.evaluate(&data.left)?;

        let short_circuits = if data.operator.kind == Type::Or {
            left.is_truthy()
        } else {
            !left.is_truthy()
        };

        if short_circuits {
            return Ok(left);
        }

        self.evaluate(&data.right)
    }

    fn visit_unary_expr(&mut self, expr: &Expr) -> Result<Object, RuntimeError> {
        let Expr::Unary(data) = expr else { unreachable!() };
        let right = self.evaluate(&data.expr)?;

        match data.operator.kind {
            Type::Minus => (-right).ok_or_else(|| RuntimeError {
                token: data.operator.clone(),
                message: "Operand must be a number.".to_string(),
            }),
            Type::Bang => Ok(Object::from(!right.is_truthy())),
            _ => unreachable!("unary operator must be '-' or '!'"),
        }
    }

    fn visit_binary_expr(&mut self, expr: &Expr) -> Result<Object, RuntimeError> {
        let Expr::Binary(data) = expr else { unreachable!() };
        let left = self.evaluate(&data.left)?;
        let right = self.evaluate(&data.right)?;

        match data.operator.kind {
            Type::Plus => (left.clone() + right.clone()).ok_or_else(|| RuntimeError {
                token: data.operator.clone(),
                message: "Operands must be two numbers or two strings.".to_string(),
            }),
            Type::Minus => (left.clone() - right.clone()).ok_or_else(|| RuntimeError {
                token: data.operator.clone(),
                message: "Operands must be numbers.".to_string(),
            }),
            Type::Star => (left.clone() * right.clone()).ok_or_else(|| RuntimeError {
                token: data.operator.clone(),
                message: "Operands must be numbers.".to_string(),
            }),
            Type::Slash => (left.clone() / right.clone()).ok_or_else(|| RuntimeError {
                token: data.operator.clone(),
                message: "Operands must be numbers.".to_string(),
            }),
            Type::Greater => self.compare(&left, &right, &data.operator, |o| o == Ordering::Greater),
            Type::GreaterEqual => self.compare(&left, &right, &data.operator, |o| o != Ordering::Less),
            Type::Less => self.compare(&left, &right, &data.operator, |o| o == Ordering::Less),
            Type::LessEqual => self.compare(&left, &right, &data.operator, |o| o != Ordering::Greater),
            Type::EqualEqual => Ok(Object::from(left == right)),
            Type::BangEqual => Ok(Object::from(left != right)),
            _ => unreachable!("not a binary operator"),
        }
    }

    fn visit_grouping_expr(&mut self, expr: &Expr) -> Result<Object, RuntimeError> {
        let Expr::Grouping(data) = expr else { unreachable!() };
        self.evaluate(&data.expr)
    }

    fn visit_variable_expr(&mut self, expr: &Expr) -> Result<Object, RuntimeError> {
        let Expr::Variable(data) = expr else { unreachable!() };
        self.look_up_variable(&data.name)
    }

    fn visit_assign_expr(&mut self, expr: &Expr) -> Result<Object, RuntimeError> {
        let Expr::Assign(data) = expr else { unreachable!() };
        let value = self.evaluate(&data.value)?;

        match self.locals.get(&data.name) {
            Some(&distance) => self.environment.borrow_mut().assign_at(distance, &data.name, value.clone()),
            None => self.globals.borrow_mut().assign(&data.name, value.clone())?,
        }

        Ok(value)
    }

    fn visit_call_expr(&mut self, expr: &Expr) -> Result<Object, RuntimeError> {
        let Expr::Call(data) = expr else { unreachable!() };
        let callee = self.evaluate(&data.callee)?;

        let mut arguments = Vec::with_capacity(data.arguments.len());
        for argument in &data.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        match callee {
            Object::Function(function) => {
                self.check_arity(&data.paren, function.arity(), arguments.len())?;
                function.call(self, arguments)
            }
            Object::NativeFunction(function) => {
                self.check_arity(&data.paren, function.arity(), arguments.len())?;
                function.call(self, arguments)
            }
            Object::Class(class) => {
                let arity = class.borrow().arity();
                self.check_arity(&data.paren, arity, arguments.len())?;
                Class::instantiate(&class, self, arguments)
            }
            _ => Err(RuntimeError {
                token: data.paren.clone(),
                message: "Can only call functions and classes.".to_string(),
            }),
        }
    }

    fn visit_get_expr(&mut self, expr: &Expr) -> Result<Object, RuntimeError> {
        let Expr::Get(data) = expr else { unreachable!() };
        let object = self.evaluate(&data.object)?;

        match &object {
            Object::Instance(instance) => instance.borrow().get(&data.name, &object),
            _ => Err(RuntimeError {
                token: data.name.clone(),
                message: "Only instances have properties.".to_string(),
            }),
        }
    }

    fn visit_set_expr(&mut self, expr: &Expr) -> Result<Object, RuntimeError> {
        let Expr::Set(data) = expr else { unreachable!() };
        let object = self.evaluate(&data.object)?;

        match object {
            Object::Instance(instance) => {
                let value = self.evaluate(&data.value)?;
                instance.borrow_mut().set(&data.name, value.clone());
                Ok(value)
            }
            _ => Err(RuntimeError {
                token: data.name.clone(),
                message: "Only instances have fields.".to_string(),
            }),
        }
    }

    fn visit_this_expr(&mut self, expr: &Expr) -> Result<Object, RuntimeError> {
        let Expr::This(data) = expr else { unreachable!() };
        self.look_up_variable(&data.keyword)
    }

    fn visit_super_expr(&mut self, expr: &Expr) -> Result<Object, RuntimeError> {
        let Expr::Super(data) = expr else { unreachable!() };

        let distance = *self.locals.get(&data.keyword).expect("resolver resolves every 'super' expression");

        let superclass = match self.environment.borrow().get_at(distance, &data.keyword)? {
            Object::Class(class) => class,
            _ => unreachable!("'super' always resolves to a class"),
        };

        let instance = self.environment.borrow().get_at(distance - 1, &Token::from("this"))?;

        match superclass.borrow().find_method(&data.method.lexeme) {
            Some(method) => Ok(Object::from(method.bind(instance))),
            None => Err(RuntimeError {
                token: data.method.clone(),
                message: format!("Undefined property '{}'.", data.method.lexeme),
            }),
        }
    }
}

impl StmtVisitor<Result<(), Unwind>> for Interpreter {
    fn visit_expression_stmt(&mut self, stmt: &Stmt) -> Result<(), Unwind> {
        let Stmt::Expression(data) = stmt else { unreachable!() };
        self.evaluate(&data.expr)?;
        Ok(())
    }

    fn visit_print_stmt(&mut self, stmt: &Stmt) -> Result<(), Unwind> {
        let Stmt::Print(data) = stmt else { unreachable!() };
        let value = self.evaluate(&data.expr)?;
        writeln!(self.stdout.borrow_mut(), "{value}").expect("stdout to accept writes");
        Ok(())
    }

    fn visit_var_stmt(&mut self, stmt: &Stmt) -> Result<(), Unwind> {
        let Stmt::Var(data) = stmt else { unreachable!() };

        let value = match &data.initializer {
            Some(initializer) => self.evaluate(initializer)?,
            None => Object::from(Literal::Nil),
        };

        self.environment.borrow_mut().define(&data.name.lexeme, value);
        Ok(())
    }

    fn visit_block_stmt(&mut self, stmt: &Stmt) -> Result<(), Unwind> {
        let Stmt::Block(data) = stmt else { unreachable!() };
        let environment = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&self.environment)))));
        self.execute_block(&data.statements, environment)
    }

    fn visit_if_stmt(&mut self, stmt: &Stmt) -> Result<(), Unwind> {
        let Stmt::If(data) = stmt else { unreachable!() };

        if self.evaluate(&data.condition)?.is_truthy() {
            self.execute(&data.then_branch)
        } else if let Some(else_branch) = &data.else_branch {
            self.execute(else_branch)
        } else {
            Ok(())
        }
    }

    fn visit_while_stmt(&mut self, stmt: &Stmt) -> Result<(), Unwind> {
        let Stmt::While(data) = stmt else { unreachable!() };

        while self.evaluate(&data.condition)?.is_truthy() {
            match self.execute(&data.body) {
                Ok(()) => (),
                Err(Unwind::Break) => break,
                Err(other) => return Err(other),
            }
        }

        Ok(())
    }

    fn visit_function_stmt(&mut self, stmt: &Stmt) -> Result<(), Unwind> {
        let Stmt::Function(data) = stmt else { unreachable!() };

        let function = Function::new(
            data.name.clone(),
            data.params.clone(),
            data.body.clone(),
            Rc::clone(&self.environment),
            false,
        );

        self.environment.borrow_mut().define(&data.name.lexeme, Object::from(function));
        Ok(())
    }

    fn visit_return_stmt(&mut self, stmt: &Stmt) -> Result<(), Unwind> {
        let Stmt::Return(data) = stmt else { unreachable!() };

        let value = match &data.value {
            Some(expr) => self.evaluate(expr)?,
            None => Object::from(Literal::Nil),
        };

        Err(Unwind::Return(value))
    }

    fn visit_break_stmt(&mut self, stmt: &Stmt) -> Result<(), Unwind> {
        let Stmt::Break(_) = stmt else { unreachable!() };
        Err(Unwind::Break)
    }

    fn visit_class_stmt(&mut self, stmt: &Stmt) -> Result<(), Unwind> {
        let Stmt::Class(data) = stmt else { unreachable!() };

        let superclass = match &data.superclass {
            Some(superclass_expr) => {
                let value = self.evaluate(superclass_expr)?;
                match value {
                    Object::Class(class) => Some(class),
                    _ => {
                        let Expr::Variable(variable) = superclass_expr else { unreachable!() };
                        return Err(Unwind::Error(RuntimeError {
                            token: variable.name.clone(),
                            message: "Superclass must be a class.".to_string(),
                        }));
                    }
                }
            }
            None => None,
        };

        self.environment.borrow_mut().define(&data.name.lexeme, Object::from(Literal::Nil));

        let enclosing = superclass.as_ref().map(|superclass| {
            let scope = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&self.environment)))));
            scope.borrow_mut().define("super", Object::Class(Rc::clone(superclass)));
            std::mem::replace(&mut self.environment, scope)
        });

        let mut methods = HashMap::new();
        for method in &data.methods {
            let Stmt::Function(method_data) = method else { unreachable!() };
            let is_initializer = method_data.name.lexeme == "init";
            let function = Function::new(
                method_data.name.clone(),
                method_data.params.clone(),
                method_data.body.clone(),
                Rc::clone(&self.environment),
                is_initializer,
            );
            methods.insert(method_data.name.lexeme.clone(), function);
        }

        if let Some(enclosing) = enclosing {
            self.environment = enclosing;
        }

        let class = Class::new(data.name.lexeme.clone(), superclass, methods);
        self.environment.borrow_mut().assign(&data.name, Object::from(Rc::new(RefCell::new(class))))?;

        Ok(())
    }
}
