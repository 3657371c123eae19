mod first_scalar;
