#[macro_use]
mod common;

#[cfg(test)]
mod field {
    tests! {
        get_set in field is OK
        "class Foo {}
        var foo = Foo();
        foo.bar = \"bar value\";
        foo.baz = \"baz value\";
        print foo.bar;
        print foo.baz;";
        "bar value"
        "baz value"
    }

    tests! {
        field_shadows_method in field is OK
        "class Foo {
          bar() { return \"method bar\"; }
        }
        var foo = Foo();
        foo.bar = \"field bar\";
        print foo.bar;";
        "field bar"
    }

    tests! {
        undefined in field is ERR
        "class Foo {}
        var foo = Foo();
        print foo.bar;";
        "Undefined property 'bar'."
        "[line 3]"
    }

    tests! {
        get_on_non_instance in field is ERR
        "var foo = 123;
        print foo.bar;";
        "Only instances have properties."
        "[line 2]"
    }

    tests! {
        set_on_non_instance in field is ERR
        "var foo = 123;
        foo.bar = \"value\";";
        "Only instances have fields."
        "[line 2]"
    }

    tests! {
        method_binds_this in field is OK
        "class Foo {
          getClosure() {
            fun closure() {
              print this.value;
            }
            return closure;
          }
        }

        var foo = Foo();
        foo.value = \"bound\";
        var method = foo.getClosure();
        method();";
        "bound"
    }
}
