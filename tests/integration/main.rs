mod http_test;
