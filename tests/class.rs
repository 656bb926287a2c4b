#[macro_use]
mod common;

#[cfg(test)]
mod class {
    tests! {
        empty in class is OK
        "class Foo {}
        print Foo;";
        "Foo"
    }

    tests! {
        instantiate in class is OK
        "class Foo {}
        print Foo();";
        "Foo instance"
    }

    tests! {
        inherit_self in class is ERR
        "class Foo < Foo {}";
        "[Line 1] error at 'Foo': A class cannot inherit from itself"
    }

    tests! {
        inherited_method in class is OK
        "class Doughnut {
          cook() {
            print \"Fry until golden brown.\";
          }
        }

        class BostonCream < Doughnut {}

        BostonCream().cook();";
        "Fry until golden brown."
    }

    tests! {
        local_reference_self in class is OK
        "class Foo {
          returnSelf() {
            return Foo;
          }
        }
        print Foo().returnSelf();";
        "Foo"
    }
}
